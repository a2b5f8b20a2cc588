//! Renders an assessment to the terminal: severity badge, medications,
//! remedies, escalation advice, disclaimer.

use crate::domain::{Assessment, TriageLevel};
use chrono::Utc;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::ExecutableCommand;
use std::io::{stdout, Write};

fn severity_color(level: TriageLevel) -> Color {
    match level {
        TriageLevel::Low => Color::Green,
        TriageLevel::Moderate => Color::Yellow,
        TriageLevel::High => Color::DarkYellow,
        TriageLevel::Emergency => Color::Red,
    }
}

/// Print the full assessment. Write errors are ignored; this is terminal
/// output, not a persisted artifact.
pub fn render(assessment: &Assessment) {
    let mut out = stdout();
    let _ = out.execute(Print("\n"));

    if assessment.severity == TriageLevel::Emergency {
        let _ = out.execute(SetForegroundColor(Color::Red));
        let _ = out.execute(SetAttribute(Attribute::Bold));
        let _ = out.execute(Print("⚠ Seek Immediate Medical Attention\n"));
        let _ = out.execute(SetAttribute(Attribute::Reset));
        let _ = out.execute(SetForegroundColor(Color::Red));
        let _ = out.execute(Print(
            "Your symptoms may indicate a serious condition. Please call emergency \
             services immediately.\n\n",
        ));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetAttribute(Attribute::Bold));
    let _ = out.execute(Print(format!("{}\n", assessment.condition)));
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(Print(format!("{}\n", assessment.description)));

    let _ = out.execute(SetForegroundColor(severity_color(assessment.severity)));
    let _ = out.execute(Print(format!("[{}]", assessment.severity.label())));
    let _ = out.execute(ResetColor);
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let _ = out.execute(Print(format!("  Assessed: {}\n", timestamp)));

    if !assessment.medications.is_empty() {
        section(&mut out, "Suggested Medications");
        for med in &assessment.medications {
            let _ = out.execute(Print(format!("  • {} [{}]\n", med.name, med.kind.label())));
            let _ = out.execute(Print(format!("    Dosage: {}\n", med.dosage)));
            for warning in &med.warnings {
                let _ = out.execute(SetForegroundColor(Color::Yellow));
                let _ = out.execute(Print(format!("    ⚠ {}\n", warning)));
                let _ = out.execute(ResetColor);
            }
        }
    }

    if !assessment.remedies.is_empty() {
        section(&mut out, "Home Remedies");
        for remedy in &assessment.remedies {
            let _ = out.execute(Print(format!(
                "  {} {}: {}\n",
                remedy.icon, remedy.title, remedy.description
            )));
        }
    }

    if !assessment.when_to_seek_help.is_empty() {
        section(&mut out, "When to Seek Medical Help");
        for item in &assessment.when_to_seek_help {
            let _ = out.execute(Print(format!("  • {}\n", item)));
        }
    }

    let _ = out.execute(Print("\n"));
    let _ = out.execute(SetAttribute(Attribute::Dim));
    let _ = out.execute(Print(
        "Medical Disclaimer: This information is for educational purposes only and \
         should not replace professional medical advice.\n",
    ));
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.flush();
}

fn section(out: &mut impl ExecutableCommand, title: &str) {
    let _ = out.execute(Print("\n"));
    let _ = out.execute(SetAttribute(Attribute::Bold));
    let _ = out.execute(Print(format!("{}\n", title)));
    let _ = out.execute(SetAttribute(Attribute::Reset));
}
