//! Console dump of a normalized record set.

use std::io::{self, Write};

use cfmigrate_provider::NormalizedRecord;

/// Write a header naming the type and length, then the pretty `Debug` form.
pub fn dump<W: Write>(records: &[NormalizedRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "(Vec<NormalizedRecord>) (len={})", records.len())?;
    writeln!(out, "{records:#?}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_lists_every_field() {
        let records = vec![NormalizedRecord {
            name: "www.example.com".to_string(),
            record_type: "CNAME".to_string(),
            ttl: 300,
            values: vec!["example.com".to_string()],
        }];
        let mut out = Vec::new();
        dump(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("(Vec<NormalizedRecord>) (len=1)\n"));
        assert!(text.contains("name: \"www.example.com\""));
        assert!(text.contains("record_type: \"CNAME\""));
        assert!(text.contains("ttl: 300"));
        assert!(text.contains("\"example.com\""));
    }

    #[test]
    fn dump_empty_set() {
        let mut out = Vec::new();
        dump(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(Vec<NormalizedRecord>) (len=0)\n[]\n");
    }
}
