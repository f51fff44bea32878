//! Integration tests for Lexrtf full document generation

use lexrtf::{
    Alignment, Attorney, Borders, CaseInfo, CaseStyle, CertificateOfService, Column, DataRow,
    Document, Paragraph, Recipient, RtfFragment, RunProps, SignatureBlock, Table, TextRun,
};

fn sample_attorney() -> Attorney {
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

fn sample_case() -> CaseInfo {
    CaseInfo {
        cause_number: "469-55555-2019".to_string(),
        county: "Collin".to_string(),
        court_type: "District".to_string(),
        court_number: "469".to_string(),
        petitioner_name: "John Doe".to_string(),
        respondent_name: "Jane Doe".to_string(),
        is_divorce: true,
        child_names: vec!["Johnny Doe".to_string(), "Julie Doe".to_string()],
        sensitive: false,
        doc_title: "Responses to Requests for Production".to_string(),
    }
}

fn sample_document() -> Document {
    let mut document = Document::new(
        "Responses to Requests for Production",
        "469-55555-2019",
        "IMMO Doe and Doe",
    );
    let _ = document.color_table.add_named_color("black");
    let _ = document.color_table.add_named_color("red");

    document.add_content(CaseStyle::new(sample_case()).render().unwrap());

    let mut p = Paragraph::new(Alignment::Justify);
    p.add_run(TextRun::new(
        "provides the _accompanying_ __responses__ to Petitioner's requests.",
    ));
    document.add_content(p);

    document.add_content(SignatureBlock::new(sample_attorney()));

    let mut certificate = CertificateOfService::new("Thomas J. Daley", "Attorney for Respondent");
    certificate.add_recipient(Recipient {
        name: "Nicholas Nuspl".to_string(),
        role: "Attorney for Petitioner".to_string(),
        method: "electronic service".to_string(),
        address: "nick@nuspl.com".to_string(),
    });
    document.add_content(certificate);

    document
}

// ============================================================================
// Whole-document assembly
// ============================================================================

mod document_assembly {
    use super::*;

    #[test]
    fn test_document_is_one_balanced_group() {
        let rtf = sample_document().to_rtf();
        assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0"));
        assert!(rtf.ends_with('}'));

        let opens = rtf.matches('{').count();
        let closes = rtf.matches('}').count();
        assert_eq!(opens, closes, "unbalanced RTF groups");
    }

    #[test]
    fn test_sections_render_in_insertion_order() {
        let rtf = sample_document().to_rtf();
        let caption = rtf.find("Cause No. ").unwrap();
        let body = rtf.find("accompanying").unwrap();
        let signature = rtf.find("State Bar No.").unwrap();
        let service = rtf.find("Certificate of Service").unwrap();
        assert!(caption < body && body < signature && signature < service);
    }

    #[test]
    fn test_preliminaries_present() {
        let rtf = sample_document().to_rtf();
        assert!(rtf.contains("\\deflang1033\\plain\\widowctrl\\hyphauto\\ftnbj"));
        assert!(rtf.contains("\\margt1440\\margr1440\\margb1440\\margl1440"));
        assert!(rtf.contains("\\paperh15840\\paperw12240"));
    }

    #[test]
    fn test_registered_colors_land_in_color_table() {
        let rtf = sample_document().to_rtf();
        assert!(rtf.contains("{\\colortbl;\\red0\\green0\\blue0;\\red255\\green0\\blue0;}"));
    }

    #[test]
    fn test_footer_carries_case_identity() {
        let rtf = sample_document().to_rtf();
        assert!(rtf.contains("{\\footer"));
        assert!(rtf.contains("IMMO DOE AND DOE"));
        assert!(rtf.contains("Cause #469-55555-2019"));
    }

    #[test]
    fn test_body_shorthand_was_translated() {
        let rtf = sample_document().to_rtf();
        assert!(rtf.contains("\\i accompanying\\i0"));
        assert!(rtf.contains("\\b responses\\b0"));
        assert!(!rtf.contains("__responses__"));
    }
}

// ============================================================================
// Tables inside documents
// ============================================================================

mod tables_in_documents {
    use super::*;

    #[test]
    fn test_discovery_response_table() {
        let columns = vec![
            Column::new("20%", "request")
                .with_header("Request")
                .with_header_font(1),
            Column::new("80%", "response")
                .with_header("Response")
                .with_header_font(1)
                .with_borders(Borders::all()),
        ];
        let rows = vec![
            DataRow::keyed([("request", "RFP 1"), ("response", "Produced herewith.")]),
            DataRow::keyed([("request", "RFP 2"), ("response", "Objection: overbroad.")]),
        ];
        let table = Table::new(columns, rows).render().unwrap();

        let mut document = Document::new("Responses", "469-55555-2019", "IMMO Doe and Doe");
        document.add_content(table);
        let rtf = document.to_rtf();

        assert!(rtf.contains("\\cellx1872\\cellx9360"));
        assert!(rtf.contains("RFP 1"));
        assert!(rtf.contains("Objection: overbroad."));
        assert_eq!(rtf.matches("\\trowd").count(), 3); // header + 2 data rows
    }

    #[test]
    fn test_partial_table_still_renders_in_document() {
        let columns = vec![
            Column::new(0.5, "name"),
            Column::new(0.5, "email"),
        ];
        let rows = vec![DataRow::keyed([("name", "Nicholas Nuspl")])];
        let table = Table::new(columns, rows).render().unwrap();

        let mut document = Document::new("Responses", "469-55555-2019", "IMMO Doe and Doe");
        document.add_content(table);
        let rtf = document.to_rtf();

        assert!(rtf.contains("Nicholas Nuspl"));
        assert!(rtf.contains("#ERR#"));
    }

    #[test]
    fn test_caption_table_matches_known_extents() {
        let rtf = CaseStyle::new(sample_case()).render().unwrap();
        assert!(rtf.contains("\\cellx4680\\cellx9360"));
    }
}

// ============================================================================
// Shorthand end to end
// ============================================================================

mod shorthand_end_to_end {
    use super::*;

    #[test]
    fn test_bold_shorthand_in_run() {
        let run = TextRun::new("a __bold__ word");
        assert_eq!(run.to_rtf(), "{a \\b bold\\b0  word}\n");
    }

    #[test]
    fn test_shorthand_and_attributes_compose() {
        let run = TextRun::with_props(
            "see [[Exhibit A]] attached",
            RunProps {
                bold: true,
                ..Default::default()
            },
        );
        let rtf = run.to_rtf();
        assert!(rtf.starts_with("{\\b "));
        assert!(rtf.contains("\\scaps Exhibit A\\scaps0 "));
    }

    #[test]
    fn test_note_shorthand_references_color_table() {
        // The note rule hardcodes color indices 1 and 2; documents using
        // it must register at least two colors.
        let run = TextRun::new("[NOTE: verify service date]");
        let rtf = run.to_rtf();
        assert!(rtf.contains("\\cf2 NOTE"));
        assert!(rtf.contains("\\cf1 :"));
    }
}
