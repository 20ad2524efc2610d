//! # Laurea CLI
//!
//! Usage:
//!   laurea request.json -o certificate.pdf
//!   echo '{ ... }' | laurea -o certificate.pdf
//!   laurea --example > request.json

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_request_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read stdin");
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "certificate.pdf".to_string());

    // Render
    match laurea::render_json(&input) {
        Ok(rendered) => {
            fs::write(&output_path, &rendered.bytes).expect("Failed to write PDF");
            eprintln!(
                "✓ Written {} bytes to {}",
                rendered.bytes.len(),
                output_path
            );
        }
        Err(e) => {
            eprintln!("✗ Failed to generate certificate: {}", e);
            std::process::exit(1);
        }
    }
}

fn example_request_json() -> &'static str {
    r##"{
  "template": "classic",
  "data": {
    "student_name": "Jane Doe",
    "course_name": "Advanced Systems Design",
    "certificate_type": "completion",
    "issue_date": "2024-01-15",
    "certificate_number": "CER-20240115-ABCDEFGHIJ",
    "instructor_name": "Prof. R. Hunter",
    "hours": 40,
    "grade": 92
  },
  "config": {
    "colors": {
      "primary": "#1e3a5f",
      "secondary": "#c9a227"
    },
    "branding": {
      "organizationName": "Acme Academy",
      "organizationSubtitle": "Department of Continuing Education",
      "signature": {
        "name": "R. Hunter",
        "label": "Lead Instructor"
      }
    }
  },
  "validationBaseUrl": "https://certs.example.com"
}"##
}
