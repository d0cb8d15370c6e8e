//! Variant tables for every styled component.
//!
//! Each table is plain static data consumed by [`super::variant::resolve`].
//! Keep option names lowercase; they double as the accepted prop values.

use super::variant::{Dimension, VariantSpec};

pub static BUTTON: VariantSpec = VariantSpec {
    component: "Button",
    base: "inline-flex items-center justify-center gap-2 rounded-md font-medium transition-colors \
           focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
    dimensions: &[
        Dimension {
            name: "variant",
            default: "primary",
            options: &[
                ("primary", "bg-indigo-600 text-white hover:bg-indigo-700 focus:ring-indigo-500"),
                ("secondary", "bg-slate-100 text-slate-900 hover:bg-slate-200 focus:ring-slate-400"),
                ("outline", "border border-slate-300 bg-white text-slate-700 hover:bg-slate-50 focus:ring-slate-400"),
                ("ghost", "bg-transparent text-slate-700 hover:bg-slate-100 focus:ring-slate-300"),
                ("danger", "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500"),
            ],
        },
        Dimension {
            name: "size",
            default: "md",
            options: &[
                ("sm", "h-8 px-3 text-sm"),
                ("md", "h-10 px-4 text-sm"),
                ("lg", "h-12 px-6 text-base"),
            ],
        },
    ],
};

pub static CARD: VariantSpec = VariantSpec {
    component: "Card",
    base: "rounded-lg bg-white dark:bg-slate-800",
    dimensions: &[
        Dimension {
            name: "variant",
            default: "default",
            options: &[
                ("default", "border border-slate-200 shadow-sm dark:border-slate-700"),
                ("outlined", "border-2 border-slate-300 shadow-none dark:border-slate-600"),
                ("elevated", "border-0 shadow-lg"),
            ],
        },
        Dimension {
            name: "padding",
            default: "md",
            options: &[("none", "p-0"), ("sm", "p-3"), ("md", "p-5"), ("lg", "p-8")],
        },
    ],
};

pub static INPUT: VariantSpec = VariantSpec {
    component: "Input",
    base: "block w-full rounded-md border bg-white text-slate-900 placeholder:text-slate-400 \
           focus:outline-none focus:ring-2 dark:bg-slate-900 dark:text-slate-100",
    dimensions: &[
        Dimension {
            name: "state",
            default: "default",
            options: &[
                ("default", "border-slate-300 focus:border-indigo-500 focus:ring-indigo-500"),
                ("error", "border-red-500 text-red-900 focus:border-red-500 focus:ring-red-500"),
            ],
        },
        Dimension {
            name: "size",
            default: "md",
            options: &[
                ("sm", "h-8 px-2 text-sm"),
                ("md", "h-10 px-3 text-sm"),
                ("lg", "h-12 px-4 text-base"),
            ],
        },
    ],
};

pub static ALERT: VariantSpec = VariantSpec {
    component: "Alert",
    base: "flex gap-3 rounded-md border p-4 text-sm",
    dimensions: &[Dimension {
        name: "tone",
        default: "info",
        options: &[
            ("info", "border-sky-200 bg-sky-50 text-sky-800"),
            ("success", "border-emerald-200 bg-emerald-50 text-emerald-800"),
            ("warning", "border-amber-200 bg-amber-50 text-amber-800"),
            ("error", "border-red-200 bg-red-50 text-red-800"),
        ],
    }],
};

/// Badge styling for the stat card's tone indicator.
pub static STAT_BADGE: VariantSpec = VariantSpec {
    component: "StatCard",
    base: "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-semibold",
    dimensions: &[Dimension {
        name: "tone",
        default: "default",
        options: &[
            ("default", "bg-slate-100 text-slate-700"),
            ("success", "bg-emerald-100 text-emerald-700"),
            ("warning", "bg-amber-100 text-amber-700"),
            ("danger", "bg-red-100 text-red-700"),
            ("info", "bg-sky-100 text-sky-700"),
        ],
    }],
};

pub static STATUS_BADGE: VariantSpec = VariantSpec {
    component: "AssignmentRow",
    base: "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium",
    dimensions: &[Dimension {
        name: "status",
        default: "pending",
        options: &[
            ("submitted", "bg-emerald-100 text-emerald-800"),
            ("pending", "bg-amber-100 text-amber-800"),
            ("overdue", "bg-red-100 text-red-800"),
        ],
    }],
};

pub static LOADER: VariantSpec = VariantSpec {
    component: "Loader",
    base: "inline-block animate-spin rounded-full border-2 border-current border-t-transparent text-indigo-600",
    dimensions: &[Dimension {
        name: "size",
        default: "md",
        options: &[
            ("xs", "h-3 w-3"),
            ("sm", "h-4 w-4"),
            ("md", "h-6 w-6"),
            ("lg", "h-8 w-8 border-4"),
            ("xl", "h-12 w-12 border-4"),
        ],
    }],
};

pub static TOAST: VariantSpec = VariantSpec {
    component: "Toast",
    base: "pointer-events-auto flex w-full max-w-sm items-start gap-3 rounded-lg border p-4 shadow-lg",
    dimensions: &[Dimension {
        name: "kind",
        default: "info",
        options: &[
            ("success", "border-emerald-200 bg-emerald-50 text-emerald-900"),
            ("error", "border-red-200 bg-red-50 text-red-900"),
            ("warning", "border-amber-200 bg-amber-50 text-amber-900"),
            ("info", "border-sky-200 bg-sky-50 text-sky-900"),
        ],
    }],
};
