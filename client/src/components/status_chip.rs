//! Status chip: label, tone, and icon for a derived curation status.

use leptos::prelude::*;
use records::status::{Icon, StatusInfo};

/// Small colored chip showing a record's derived status.
#[component]
pub fn StatusChip(info: StatusInfo) -> impl IntoView {
    let class = format!("chip chip--{}", info.tone.as_str());
    view! {
        <span class=class>
            <StatusIcon icon=info.icon/>
            <span>{info.label}</span>
        </span>
    }
}

/// Inline SVG glyph for a status icon.
#[component]
pub fn StatusIcon(icon: Icon) -> impl IntoView {
    view! {
        <svg class="chip__icon" viewBox="0 0 20 20" aria-hidden="true">
            {match icon {
                Icon::Check => view! {
                    <path d="M4 10.5 8 14.5 16 5.5" fill="none"></path>
                }
                    .into_any(),
                Icon::Block => view! {
                    <g fill="none">
                        <circle cx="10" cy="10" r="7"></circle>
                        <line x1="5" y1="15" x2="15" y2="5"></line>
                    </g>
                }
                    .into_any(),
                Icon::Cancel => view! {
                    <g fill="none">
                        <line x1="5" y1="5" x2="15" y2="15"></line>
                        <line x1="15" y1="5" x2="5" y2="15"></line>
                    </g>
                }
                    .into_any(),
                Icon::Hourglass => view! {
                    <path d="M6 4 H14 V7 L10 10 L14 13 V16 H6 V13 L10 10 L6 7 Z" fill="none"></path>
                }
                    .into_any(),
            }}
        </svg>
    }
}
