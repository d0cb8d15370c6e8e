//! Utility-class merging with last-token-wins conflict resolution.
//!
//! DESIGN
//! ======
//! Every token is reduced to a conflict key: its modifier chain (`hover:`,
//! `dark:`, `md:` ...), an optional `!` marker, and the utility group it
//! belongs to. Two tokens with the same key conflict and the later one
//! survives. A few groups are "wide" and also clear narrower groups declared
//! before them (`p-4` clears an earlier `px-2`), matching how a cascading
//! class merge behaves when a shorthand follows a longhand.
//!
//! Tokens that are not recognized as utilities have no group. They only
//! collapse with exact duplicates, so arbitrary component classes such as
//! `btn` or `toast__icon` pass through untouched.

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// Prefix -> group table for utilities whose group is fully decided by the
/// prefix. Longer prefixes must come before shorter ones sharing a stem.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("w-", "w"),
    ("h-", "h"),
    ("size-", "size"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("z-", "z"),
    ("opacity-", "opacity"),
    ("cursor-", "cursor"),
    ("items-", "items"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("grid-flow-", "grid-flow"),
    ("col-span-", "col-span"),
    ("row-span-", "row-span"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("duration-", "duration"),
    ("animate-", "animate"),
    ("rounded-ss", "rounded-ss"),
    ("rounded-se", "rounded-se"),
    ("rounded-es", "rounded-es"),
    ("rounded-ee", "rounded-ee"),
    ("rounded-s", "rounded-s"),
    ("rounded-e", "rounded-e"),
    ("rounded-tl", "rounded-tl"),
    ("rounded-tr", "rounded-tr"),
    ("rounded-bl", "rounded-bl"),
    ("rounded-br", "rounded-br"),
    ("rounded-t", "rounded-t"),
    ("rounded-r", "rounded-r"),
    ("rounded-b", "rounded-b"),
    ("rounded-l", "rounded-l"),
    ("rounded", "rounded"),
    ("transition", "transition"),
];

/// Wide groups and the narrower groups they clear when they come later.
const OVERRIDES: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("gap", &["gap-x", "gap-y"]),
    ("size", &["w", "h"]),
    ("inset", &["inset-x", "inset-y", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    (
        "rounded",
        &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-bl",
            "rounded-br",
            "rounded-s",
            "rounded-e",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
    ),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-bl", "rounded-br"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
];

/// Parsed conflict key of one class token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ConflictKey {
    /// Modifier chain including trailing `:` and the `!` marker, e.g. `dark:hover:!`.
    pub scope: String,
    pub group: &'static str,
}

/// Merge class fragments into one deduplicated, order-stable class string.
///
/// Later tokens win over earlier tokens in the same conflict group.
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = parts.into_iter().flat_map(str::split_whitespace).collect();
    let keys: Vec<Option<ConflictKey>> = tokens.iter().map(|t| conflict_key(t)).collect();

    let mut keep = vec![true; tokens.len()];
    for (later, later_token) in tokens.iter().enumerate() {
        for earlier in 0..later {
            if !keep[earlier] {
                continue;
            }
            if tokens[earlier] == *later_token || overrides(keys[later].as_ref(), keys[earlier].as_ref()) {
                keep[earlier] = false;
            }
        }
    }

    tokens
        .iter()
        .zip(keep)
        .filter_map(|(token, kept)| kept.then_some(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join class fragments without conflict resolution, skipping empty parts.
pub fn join_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn overrides(later: Option<&ConflictKey>, earlier: Option<&ConflictKey>) -> bool {
    let (Some(later), Some(earlier)) = (later, earlier) else {
        return false;
    };
    if later.scope != earlier.scope {
        return false;
    }
    if later.group == earlier.group {
        return true;
    }
    OVERRIDES
        .iter()
        .find(|(wide, _)| *wide == later.group)
        .is_some_and(|(_, narrow)| narrow.contains(&earlier.group))
}

pub(crate) fn conflict_key(token: &str) -> Option<ConflictKey> {
    let (modifiers, utility) = match token.rfind(':') {
        Some(idx) => token.split_at(idx + 1),
        None => ("", token),
    };
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", utility),
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    let group = utility_group(utility)?;
    Some(ConflictKey { scope: format!("{modifiers}{important}"), group })
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if VISIBILITY.contains(&utility) {
        return Some("visibility");
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(text_group(rest));
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) { "font-weight" } else { "font-family" });
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return Some(background_group(rest));
    }
    if utility == "border" || utility.starts_with("border-") {
        return Some(border_group(utility.strip_prefix("border-").unwrap_or("")));
    }
    if utility == "ring" || utility.starts_with("ring-") {
        return Some(ring_group(utility.strip_prefix("ring-").unwrap_or("")));
    }
    if utility == "shadow" || utility.starts_with("shadow-") {
        return Some(shadow_group(utility.strip_prefix("shadow-").unwrap_or("")));
    }
    if let Some(rest) = utility.strip_prefix("flex-") {
        return Some(match rest {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }
    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| {
            utility == prefix.trim_end_matches('-')
                || (utility.starts_with(prefix) && (prefix.ends_with('-') || utility[prefix.len()..].starts_with('-')))
        })
        .map(|(_, group)| *group)
}

fn text_group(rest: &str) -> &'static str {
    // `text-sm/6` carries a line height; `text-white/50` an opacity.
    let base = rest.split_once('/').map_or(rest, |(base, _)| base);
    if FONT_SIZES.contains(&base) || is_arbitrary_length(base) {
        "font-size"
    } else if TEXT_ALIGN.contains(&rest) {
        "text-align"
    } else {
        "text-color"
    }
}

fn background_group(rest: &str) -> &'static str {
    match rest {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "cover" | "contain" | "auto" => "bg-size",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" => "bg-repeat",
        _ if rest.starts_with("opacity-") => "bg-opacity",
        _ if rest.starts_with("gradient-") => "bg-image",
        _ => "bg-color",
    }
}

fn border_group(rest: &str) -> &'static str {
    let (side, value) = rest.split_once('-').unwrap_or((rest, ""));
    let is_width = value.is_empty() || value.chars().all(|c| c.is_ascii_digit());
    let sided = match side {
        "x" => Some(("border-x-w", "border-x-color")),
        "y" => Some(("border-y-w", "border-y-color")),
        "t" => Some(("border-t-w", "border-t-color")),
        "r" => Some(("border-r-w", "border-r-color")),
        "b" => Some(("border-b-w", "border-b-color")),
        "l" => Some(("border-l-w", "border-l-color")),
        _ => None,
    };
    if let Some((width, color)) = sided {
        return if is_width { width } else { color };
    }
    if rest.is_empty() || rest.chars().all(|c| c.is_ascii_digit()) || is_arbitrary_length(rest) {
        "border-w"
    } else if BORDER_STYLES.contains(&rest) {
        "border-style"
    } else if rest.starts_with("opacity-") {
        "border-opacity"
    } else {
        "border-color"
    }
}

fn ring_group(rest: &str) -> &'static str {
    if rest.is_empty() || rest.chars().all(|c| c.is_ascii_digit()) || rest == "inset" {
        "ring-w"
    } else if let Some(offset) = rest.strip_prefix("offset-") {
        if offset.chars().all(|c| c.is_ascii_digit()) || is_arbitrary_length(offset) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        }
    } else {
        "ring-color"
    }
}

fn shadow_group(rest: &str) -> &'static str {
    match rest {
        "" | "2xs" | "xs" | "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => "shadow",
        _ if rest.starts_with('[') && !rest.starts_with("[#") => "shadow",
        _ => "shadow-color",
    }
}

/// `[12px]`, `[1.5rem]` etc. Arbitrary colors such as `[#fff]` are not lengths.
fn is_arbitrary_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .is_some_and(|inner| inner.starts_with(|c: char| c.is_ascii_digit() || c == '.'))
}
