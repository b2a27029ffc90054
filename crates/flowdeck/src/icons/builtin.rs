//! Fixed icon assets compiled into the binary: the local SVG library, the
//! glyph table, and the shared placeholder.

/// Drawn whenever resolution fails; a plain outlined square.
pub const PLACEHOLDER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect></svg>"#;

/// Local SVG library, keyed by display name.
pub fn svg(name: &str) -> Option<&'static str> {
    let svg = match name {
        "default" => PLACEHOLDER,
        "EC2" | "Virtual Machine" | "Compute Engine" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="2" y="2" width="20" height="8" rx="2" ry="2"></rect><rect x="2" y="14" width="20" height="8" rx="2" ry="2"></rect><line x1="6" y1="6" x2="6.01" y2="6"></line><line x1="6" y1="18" x2="6.01" y2="18"></line></svg>"##
        }
        "S3" | "Storage" | "Cloud Storage" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><ellipse cx="12" cy="5" rx="9" ry="3"></ellipse><path d="M21 12c0 1.66-4 3-9 3s-9-1.34-9-3"></path><path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"></path></svg>"##
        }
        "Lambda" | "Function" | "Cloud Functions" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="16 18 22 12 16 6"></polyline><polyline points="8 6 2 12 8 18"></polyline></svg>"##
        }
        "DynamoDB" | "Cosmos DB" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3v18"></path><rect x="3" y="3" width="18" height="18" rx="2"></rect><path d="M3 9h18"></path><path d="M3 15h18"></path></svg>"##
        }
        "CloudWatch" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 3v18h18"></path><rect x="7" y="10" width="3" height="8"></rect><rect x="13" y="5" width="3" height="13"></rect></svg>"##
        }
        "SNS" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9"></path><path d="M13.73 21a2 2 0 0 1-3.46 0"></path></svg>"##
        }
        "SQS" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"></path></svg>"##
        }
        "API Gateway" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="6" cy="18" r="2"></circle><circle cx="6" cy="6" r="2"></circle><circle cx="18" cy="18" r="2"></circle><circle cx="18" cy="6" r="2"></circle><line x1="6" y1="8" x2="6" y2="16"></line><line x1="8" y1="6" x2="16" y2="6"></line><line x1="8" y1="18" x2="16" y2="18"></line><line x1="18" y1="8" x2="18" y2="16"></line></svg>"##
        }
        "CloudFront" => {
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#FF9900" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"></circle><line x1="2" y1="12" x2="22" y2="12"></line><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path></svg>"##
        }
        "database" => {
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><ellipse cx="12" cy="5" rx="9" ry="3"></ellipse><path d="M21 12c0 1.66-4 3-9 3s-9-1.34-9-3"></path><path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"></path></svg>"#
        }
        _ => return None,
    };
    Some(svg)
}

/// Fixed glyph library: component-library icon names mapped to emoji the
/// default egui font can render.
pub fn glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "Server" => "🖳",
        "Database" | "Table" | "TableProperties" => "🗄",
        "Cloud" => "☁",
        "Code" => "⌨",
        "Globe" => "🌐",
        "Layout" | "LayoutGrid" | "LayoutTemplate" => "🗖",
        "Layers" | "LayoutList" => "🗇",
        "GitBranch" | "GitMerge" => "⑂",
        "GitCommit" => "◉",
        "GitPullRequest" => "⇅",
        "Lock" => "🔒",
        "Settings" => "⚙",
        "Zap" => "⚡",
        "Clock" => "🕓",
        "Mail" => "✉",
        "Search" => "🔍",
        "User" | "Users" => "👤",
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_placeholder() {
        assert_eq!(svg("default"), Some(PLACEHOLDER));
    }

    #[test]
    fn known_names_resolve() {
        for name in ["EC2", "S3", "Lambda", "DynamoDB", "API Gateway"] {
            assert!(svg(name).is_some(), "missing builtin svg {name}");
        }
        for name in ["Server", "Database", "GitBranch"] {
            assert!(glyph(name).is_some(), "missing glyph {name}");
        }
    }

    #[test]
    fn unknown_names_miss() {
        assert!(svg("Nope").is_none());
        assert!(glyph("Nope").is_none());
    }

    #[test]
    fn builtin_svgs_pass_upload_validation() {
        // The compiled-in library must satisfy the same safety rules imposed
        // on uploads.
        for name in ["default", "EC2", "S3", "SQS", "CloudFront", "database"] {
            super::super::upload::validate_svg(svg(name).unwrap()).unwrap();
        }
    }
}
