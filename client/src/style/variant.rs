//! Declarative style-variant tables and their resolver.
//!
//! DESIGN
//! ======
//! A component declares one `VariantSpec` as static data: a base class list
//! plus a set of dimensions (`variant`, `size`, `tone` ...), each mapping
//! option names to class fragments with a default option. Resolution is a pure
//! function over that data and a partial selection; it never fails.
//!
//! Unknown options degrade to the dimension default. The fallback is recorded
//! in the returned `Resolution` and surfaced as a development diagnostic.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use super::merge::merge_classes;

/// One style dimension: option name -> class fragment, with a default.
#[derive(Clone, Copy, Debug)]
pub struct Dimension {
    pub name: &'static str,
    pub default: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

impl Dimension {
    /// Fragment for `option`, if the dimension declares it.
    pub fn fragment(&self, option: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(name, _)| *name == option)
            .map(|(_, fragment)| *fragment)
    }

    /// Fragment of the default option.
    pub fn default_fragment(&self) -> &'static str {
        self.fragment(self.default).unwrap_or_default()
    }

    pub fn option_names(&self) -> impl Iterator<Item = &'static str> {
        self.options.iter().map(|(name, _)| *name)
    }
}

/// Immutable variant table for one component type.
#[derive(Clone, Copy, Debug)]
pub struct VariantSpec {
    pub component: &'static str,
    pub base: &'static str,
    pub dimensions: &'static [Dimension],
}

impl VariantSpec {
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }
}

/// A requested option that could not be honored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// The dimension exists but does not declare this option; its default was used.
    UnknownOption { dimension: &'static str, requested: String, used: &'static str },
    /// The selection named a dimension the table does not have; it was ignored.
    UnknownDimension { dimension: String },
}

/// Result of resolving a selection against a `VariantSpec`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub class: String,
    /// Chosen option per dimension, in declaration order.
    pub chosen: Vec<(&'static str, &'static str)>,
    pub fallbacks: Vec<Fallback>,
}

impl Resolution {
    /// Option that was actually applied for `dimension`.
    pub fn option(&self, dimension: &str) -> Option<&'static str> {
        self.chosen.iter().find(|(name, _)| *name == dimension).map(|(_, option)| *option)
    }
}

/// Resolve `selection` against `spec` and merge `overrides` last.
///
/// `selection` is a partial `dimension -> option` mapping. When a dimension
/// appears more than once, the last entry wins.
pub fn resolve(spec: &VariantSpec, selection: &[(&str, &str)], overrides: &str) -> String {
    resolve_reported(spec, selection, overrides).class
}

/// Like [`resolve`], returning the full report. Fallbacks are still emitted as
/// development diagnostics.
pub fn resolve_reported(spec: &VariantSpec, selection: &[(&str, &str)], overrides: &str) -> Resolution {
    let resolution = resolve_report(spec, selection, overrides);
    for fallback in &resolution.fallbacks {
        report_fallback(spec.component, fallback);
    }
    resolution
}

/// Build the report without emitting diagnostics.
pub fn resolve_report(spec: &VariantSpec, selection: &[(&str, &str)], overrides: &str) -> Resolution {
    let mut fallbacks = Vec::new();
    let mut chosen = Vec::with_capacity(spec.dimensions.len());
    let mut fragments = Vec::with_capacity(spec.dimensions.len() + 2);
    fragments.push(spec.base);

    for dimension in spec.dimensions {
        let requested = selection
            .iter()
            .rev()
            .find(|(name, _)| *name == dimension.name)
            .map(|(_, option)| option.trim())
            .filter(|option| !option.is_empty());

        let (option, fragment) = match requested {
            None => (dimension.default, dimension.default_fragment()),
            Some(option) => match dimension.options.iter().find(|(name, _)| *name == option) {
                Some((name, fragment)) => (*name, *fragment),
                None => {
                    fallbacks.push(Fallback::UnknownOption {
                        dimension: dimension.name,
                        requested: option.to_owned(),
                        used: dimension.default,
                    });
                    (dimension.default, dimension.default_fragment())
                }
            },
        };
        chosen.push((dimension.name, option));
        fragments.push(fragment);
    }

    for (name, _) in selection {
        if spec.dimension(name).is_none() {
            let unknown = Fallback::UnknownDimension { dimension: (*name).to_owned() };
            if !fallbacks.contains(&unknown) {
                fallbacks.push(unknown);
            }
        }
    }

    fragments.push(overrides);
    Resolution { class: merge_classes(fragments), chosen, fallbacks }
}

fn report_fallback(component: &str, fallback: &Fallback) {
    match fallback {
        Fallback::UnknownOption { dimension, requested, used } => {
            leptos::logging::debug_warn!(
                "{component}: unsupported {dimension} {requested:?}, using {used:?}"
            );
        }
        Fallback::UnknownDimension { dimension } => {
            leptos::logging::debug_warn!("{component}: ignoring unknown style dimension {dimension:?}");
        }
    }
}
