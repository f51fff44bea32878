//! Certificate of service
//!
//! Renders the certificate appended to a served pleading: who was served,
//! how, and the serving attorney's signature lines. Always starts on its
//! own page.

use crate::core::text::{Alignment, Paragraph, RunProps, TextRun};
use crate::core::RtfFragment;

/// One served party or attorney of record
#[derive(Debug, Clone)]
pub struct Recipient {
    pub name: String,
    pub role: String,
    /// Service method, e.g. "electronic service"
    pub method: String,
    pub address: String,
}

/// Certificate of service fragment
#[derive(Debug, Clone)]
pub struct CertificateOfService {
    attorney: String,
    designation: String,
    recipients: Vec<Recipient>,
}

impl CertificateOfService {
    pub fn new(attorney: impl Into<String>, designation: impl Into<String>) -> Self {
        CertificateOfService {
            attorney: attorney.into(),
            designation: designation.into(),
            recipients: Vec::new(),
        }
    }

    pub fn add_recipient(&mut self, recipient: Recipient) {
        self.recipients.push(recipient);
    }
}

impl RtfFragment for CertificateOfService {
    fn to_rtf(&self) -> String {
        let mut parts = Vec::new();

        let mut p = Paragraph::new(Alignment::Center);
        p.set_heading();
        p.double_space = true;
        p.add_run(TextRun::with_props(
            "Certificate of Service\n",
            RunProps {
                bold: true,
                all_caps: true,
                ..Default::default()
            },
        ));
        parts.push(p.to_rtf());

        let mut p = Paragraph::new(Alignment::Left);
        p.add_run(TextRun::new(
            "\nI certify that a true and correct copy of this document was served\n \
             on each party or attorney of record in compliance with the Texas\n \
             Rules of Civil Procedure on [*_____*] as follows:\n",
        ));
        p.add_line_break();
        parts.push(p.to_rtf());

        for recipient in &self.recipients {
            let mut p = Paragraph::new(Alignment::Left);
            p.add_run(TextRun::new(format!(
                "{}, {}",
                recipient.name, recipient.role
            )));
            parts.push(p.to_rtf());

            let mut p = Paragraph::new(Alignment::Left);
            p.add_run(TextRun::with_props(
                format!("Via {} to {}", recipient.method, recipient.address),
                RunProps {
                    italic: true,
                    ..Default::default()
                },
            ));
            p.add_line_break();
            parts.push(p.to_rtf());
        }

        let signature = format!(
            "{{\\pard\\par}} \n\
             {{\\pard\\ql\\li4680 /s/ {} \\par}}\
             {{\\pard\\ql\\li4680\\brdrt\\brdrs\\brdrw10\\brsp20 \
             {}\\line {}\\par}}",
            self.attorney, self.attorney, self.designation
        );
        parts.push(signature);

        format!("\\page \n{}", parts.join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certificate() -> CertificateOfService {
        let mut cert =
            CertificateOfService::new("Thomas J. Daley", "Attorney for Respondent");
        cert.add_recipient(Recipient {
            name: "Nicholas Nuspl".to_string(),
            role: "Attorney for Petitioner".to_string(),
            method: "electronic service".to_string(),
            address: "nick@nuspl.com".to_string(),
        });
        cert.add_recipient(Recipient {
            name: "Mary Stanley-Renouf".to_string(),
            role: "Assistant Attorney General".to_string(),
            method: "electronic service".to_string(),
            address: "mary@oag.com".to_string(),
        });
        cert
    }

    #[test]
    fn test_starts_on_new_page() {
        let rtf = certificate().to_rtf();
        assert!(rtf.starts_with("\\page \n"));
    }

    #[test]
    fn test_lists_every_recipient() {
        let rtf = certificate().to_rtf();
        assert!(rtf.contains("Nicholas Nuspl, Attorney for Petitioner"));
        assert!(rtf.contains("Via electronic service to nick@nuspl.com"));
        assert!(rtf.contains("Mary Stanley-Renouf, Assistant Attorney General"));
        assert!(rtf.contains("Via electronic service to mary@oag.com"));
    }

    #[test]
    fn test_service_methods_are_italic() {
        let rtf = certificate().to_rtf();
        assert!(rtf.contains("{\\i Via electronic service to nick@nuspl.com}"));
    }

    #[test]
    fn test_signature_lines() {
        let rtf = certificate().to_rtf();
        assert!(rtf.contains("/s/ Thomas J. Daley"));
        assert!(rtf.contains("Thomas J. Daley\\line Attorney for Respondent"));
    }

    #[test]
    fn test_blank_service_date_placeholder() {
        let rtf = certificate().to_rtf();
        assert!(rtf.contains("[*_____*]"));
    }
}
