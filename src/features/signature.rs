//! Attorney signature block

use crate::core::RtfFragment;

/// Signing attorney contact record
#[derive(Debug, Clone, Default)]
pub struct Attorney {
    pub name: String,
    pub bar_no: String,
    pub firm_name: String,
    pub street: String,
    /// City, state, and zip on one line
    pub csz: String,
    pub telephone: String,
    pub fax: String,
    pub email: String,
    pub role: String,
}

/// Signature block fragment: firm address, e-signature line, bar number,
/// and role, all indented to the right half of the page.
#[derive(Debug, Clone)]
pub struct SignatureBlock {
    attorney: Attorney,
}

impl SignatureBlock {
    pub fn new(attorney: Attorney) -> Self {
        SignatureBlock { attorney }
    }
}

/// One left-indented line that keeps with the following paragraph
fn line(text: &str) -> String {
    format!("{{\\pard\\ql\\li4680\\keepn {}\\par}}\n", text)
}

/// Same as [`line`] but with a top border, used as the signature rule
fn underlined(text: &str) -> String {
    format!(
        "{{\\pard\\ql\\li4680\\keepn\\brdrt\\brdrs\\brdrw10\\brsp20 {}\\par}}\n",
        text
    )
}

fn blank_line() -> String {
    "{\\pard\\keepn\\par}\n".to_string()
}

impl RtfFragment for SignatureBlock {
    fn to_rtf(&self) -> String {
        let a = &self.attorney;
        let mut parts = Vec::new();
        parts.push(line("\\line Respectfully,\\line"));
        parts.push(line(&a.firm_name));
        parts.push(line(&a.street));
        parts.push(line(&a.csz));
        parts.push(line(&format!("Tel: {}", a.telephone)));
        parts.push(line(&format!("Fax: {}", a.fax)));
        parts.push(blank_line());
        parts.push(line(&format!("/s/ {}", a.name)));
        parts.push(underlined(&a.name));
        parts.push(line(&format!("State Bar No. {}", a.bar_no)));
        parts.push(line(&a.email));
        parts.push(blank_line());
        parts.push(line(&a.role));
        parts.join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attorney() -> Attorney {
        Attorney {
            name: "Thomas J. Daley".to_string(),
            bar_no: "24059643".to_string(),
            firm_name: "Power Daley PLLC".to_string(),
            street: "825 Watters Creek Blvd Ste 395".to_string(),
            csz: "Allen, TX 75013".to_string(),
            telephone: "972-985-4448".to_string(),
            fax: "972-985-4449".to_string(),
            email: "admin@powerdaley.com".to_string(),
            role: "Attorney for Respondent".to_string(),
        }
    }

    #[test]
    fn test_signature_block_contents() {
        let rtf = SignatureBlock::new(attorney()).to_rtf();
        assert!(rtf.contains("Respectfully,"));
        assert!(rtf.contains("/s/ Thomas J. Daley"));
        assert!(rtf.contains("State Bar No. 24059643"));
        assert!(rtf.contains("Tel: 972-985-4448"));
        assert!(rtf.contains("Attorney for Respondent"));
    }

    #[test]
    fn test_signature_rule_has_top_border() {
        let rtf = SignatureBlock::new(attorney()).to_rtf();
        assert!(rtf.contains("\\brdrt\\brdrs\\brdrw10\\brsp20 Thomas J. Daley"));
    }

    #[test]
    fn test_lines_are_indented_to_right_half() {
        let rtf = SignatureBlock::new(attorney()).to_rtf();
        assert!(rtf.contains("\\li4680"));
    }
}
