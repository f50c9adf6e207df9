use serde::{Deserialize, Serialize};

/// Keywords that mark a reply as coming from the product search
const PRODUCT_KEYWORDS: &[&str] = &["product", "tumbler", "bottle", "glass"];

/// Keywords that mark a reply as coming from the outlet search
const OUTLET_KEYWORDS: &[&str] = &["outlet", "location", "address", "drive-through"];

/// Which backend tool most likely produced a bot reply
///
/// Recomputed from the message text on every render; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolUse {
    Calculator,
    Products,
    Outlets,
    #[default]
    None,
}

/// Badge rendering data for a detected tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Classify a bot reply by the backend tool that likely produced it
///
/// Case-insensitive substring heuristics, first match wins:
/// 1. "result" together with at least one digit → calculator
/// 2. any product keyword → products
/// 3. any outlet keyword → outlets
/// 4. otherwise none
///
/// This is a best-effort UI affordance, not an observation of the backend's
/// actual tool invocation: any numeric "result" phrase triggers the
/// calculator badge even in unrelated prose. False positives only affect
/// badge display, never message content.
pub fn detect_tool(message: &str) -> ToolUse {
    let lower = message.to_lowercase();

    if lower.contains("result") && lower.chars().any(|c| c.is_ascii_digit()) {
        return ToolUse::Calculator;
    }

    if PRODUCT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return ToolUse::Products;
    }

    if OUTLET_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return ToolUse::Outlets;
    }

    ToolUse::None
}

impl ToolUse {
    /// Badge for this classification, or `None` when no badge is rendered
    pub fn badge(&self) -> Option<Badge> {
        match self {
            ToolUse::Calculator => Some(Badge { icon: "🧮", label: "Calculator" }),
            ToolUse::Products => Some(Badge { icon: "🛍️", label: "Product Search" }),
            ToolUse::Outlets => Some(Badge { icon: "📍", label: "Outlet Finder" }),
            ToolUse::None => None,
        }
    }
}
