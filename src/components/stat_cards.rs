//! Dashboard counter cards.

use leptos::prelude::*;

use crate::state::stats::StatsBoard;
use crate::util::dom::STAT_VALUE_CLASS;

/// Card labels, in slot order.
const STAT_LABELS: [&str; 4] = ["Total Posts", "Total Reach", "Scheduled", "Media Files"];

/// Four `.stat-value` cards bound to `board`.
#[component]
pub fn StatCards(board: RwSignal<StatsBoard>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {STAT_LABELS
                .iter()
                .enumerate()
                .map(|(slot, label)| {
                    let value = move || board.get().slots().get(slot).cloned().unwrap_or_default();
                    view! {
                        <div class="stat-card">
                            <span class=STAT_VALUE_CLASS>{value}</span>
                            <span class="stat-card__label">{*label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
