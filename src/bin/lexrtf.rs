//! Lexrtf CLI - build a sample discovery-response pleading as RTF

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Write};

#[cfg(feature = "cli")]
use lexrtf::{
    Alignment, Attorney, CaseInfo, CaseStyle, CertificateOfService, Document, Paragraph,
    Recipient, RtfFragment, RunProps, SignatureBlock, TextRun,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "lexrtf")]
#[command(version)]
#[command(about = "Lexrtf - RTF document generator for legal pleadings", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Document title
    #[arg(long, default_value = "Responses to Requests for Production")]
    title: String,

    /// Cause number
    #[arg(long, default_value = "469-55555-2019")]
    cause_number: String,

    /// Short case name for the footer
    #[arg(long, default_value = "IMMO Doe and Doe")]
    case_name: String,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Info) = cli.command {
        println!("Lexrtf - RTF document generator for legal pleadings");
        println!("Version: {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Features:");
        println!("  ✓ Case caption (case style) blocks");
        println!("  ✓ Twip-accurate table layout");
        println!("  ✓ Markdown-like text shorthand");
        println!("  ✓ Signature blocks and certificates of service");
        println!();
        return Ok(());
    }

    let rtf = match build_sample_document(&cli) {
        Ok(rtf) => rtf,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", rtf)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", rtf);
        }
    }

    Ok(())
}

/// Assemble the demonstration pleading: case style, one body paragraph
/// exercising the shorthand, signature block, and certificate of service.
#[cfg(feature = "cli")]
fn build_sample_document(cli: &Cli) -> Result<String, lexrtf::RtfError> {
    let signing_attorney = Attorney {
        name: "Thomas J. Daley".to_string(),
        bar_no: "24059643".to_string(),
        firm_name: "Power Daley PLLC".to_string(),
        street: "825 Watters Creek Blvd Ste 395".to_string(),
        csz: "Allen, TX 75013".to_string(),
        telephone: "972-985-4448".to_string(),
        fax: "972-985-4449".to_string(),
        email: "admin@powerdaley.com".to_string(),
        role: "Attorney for Respondent".to_string(),
    };

    let case_info = CaseInfo {
        cause_number: cli.cause_number.clone(),
        county: "Collin".to_string(),
        court_type: "District".to_string(),
        court_number: "469".to_string(),
        petitioner_name: "John Doe".to_string(),
        respondent_name: "Jane Doe".to_string(),
        is_divorce: true,
        child_names: vec!["Johnny Doe".to_string(), "Julie Doe".to_string()],
        sensitive: false,
        doc_title: cli.title.clone(),
    };

    let mut document = Document::new(&cli.title, &cli.cause_number, &cli.case_name);
    // The practitioner-note shorthand references color index 2
    let _ = document.color_table.add_named_color("black");
    let _ = document.color_table.add_named_color("red");

    // Case style
    document.add_content(CaseStyle::new(case_info).render()?);

    // Document body
    let mut p = Paragraph::new(Alignment::Justify);
    p.add_run(TextRun::with_props(
        "Jane Doe ",
        RunProps {
            bold: true,
            small_caps: true,
            ..Default::default()
        },
    ));
    p.add_run(TextRun::new(
        "provides the _accompanying_ __responses__ to Petitioner's ",
    ));
    p.add_run(TextRun::with_props(
        "[[Requests for Production and Inspection]] ",
        RunProps {
            italic: true,
            ..Default::default()
        },
    ));
    p.add_run(TextRun::new(
        "propounded by Petitioner on November 1, 2019.",
    ));
    document.add_content(p);

    // Signature block
    document.add_content(SignatureBlock::new(signing_attorney.clone()));

    // Certificate of service
    let mut certificate =
        CertificateOfService::new(signing_attorney.name, signing_attorney.role);
    certificate.add_recipient(Recipient {
        name: "Nicholas Nuspl".to_string(),
        role: "Attorney for Petitioner".to_string(),
        method: "electronic service".to_string(),
        address: "nick@nuspl.com".to_string(),
    });
    certificate.add_recipient(Recipient {
        name: "Mary Stanley-Renouf".to_string(),
        role: "Assistant Attorney General".to_string(),
        method: "electronic service".to_string(),
        address: "mary@oag.com".to_string(),
    });
    document.add_content(certificate);

    Ok(document.to_rtf())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install lexrtf --features cli");
    eprintln!("  lexrtf [OPTIONS]");
}
