use crate::manifest::Dependency;
use crate::policy::{LicensePolicy, ViolationKind, ViolationSummary};

/// Render the aggregated third-party license file: one block per accepted
/// dependency, "<name> - <license>" followed by the license text, blocks
/// separated by a blank line. Rejected dependencies are left out.
pub fn render_attribution(policy: &LicensePolicy, dependencies: &[Dependency]) -> String {
    let blocks: Vec<String> = dependencies
        .iter()
        .filter(|dependency| policy.allow(dependency))
        .map(|dependency| {
            let name = dependency.name.as_deref().unwrap_or("(unnamed)");
            let license = policy.resolve_license_type(dependency).unwrap_or("UNKNOWN");
            let text = policy.resolve_license_text(dependency).unwrap_or("");
            format!("{} - {}\n{}", name, license, text)
        })
        .collect();

    blocks.join("\n\n")
}

pub fn format_table_output(summary: &ViolationSummary, total_packages: usize) -> String {
    let mut output = String::new();

    let accepted = total_packages - summary.total;
    output.push_str(&format!(
        "📦 License Audit ({} bundled dependencies)\n",
        total_packages
    ));
    output.push_str(&format!(
        "✅ {} accepted  🚫 {} forbidden  ⚠️ {} missing license\n\n",
        accepted, summary.forbidden, summary.missing
    ));

    if summary.details.is_empty() {
        output.push_str("✅ No license violations found!\n");
    } else {
        output.push_str("⚠️  Violations Found:\n");
        output.push_str(&format_violation_table(summary));
    }

    output
}

fn format_violation_table(summary: &ViolationSummary) -> String {
    let mut output = String::new();

    // Table header
    output.push_str("┌─────────────────────┬─────────────┬─────────────────────┐\n");
    output.push_str("│ Package             │ License     │ Problem             │\n");
    output.push_str("├─────────────────────┼─────────────┼─────────────────────┤\n");

    // Table rows
    for violation in &summary.details {
        let name = truncate(violation.package_name.as_deref().unwrap_or("(unnamed)"), 19);
        let license = truncate(violation.license.as_deref().unwrap_or("(unknown)"), 11);
        let problem = match violation.kind {
            ViolationKind::Forbidden => "Forbidden license",
            ViolationKind::Missing => "No license info",
        };

        output.push_str(&format!(
            "│ {:<19} │ {:<11} │ {:<19} │\n",
            name, license, problem
        ));
    }

    // Table footer
    output.push_str("└─────────────────────┴─────────────┴─────────────────────┘\n");

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
