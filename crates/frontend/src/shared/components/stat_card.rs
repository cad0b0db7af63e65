use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }

    /// Warning when a count is non-zero, neutral otherwise.
    pub fn alert_if_any(count: usize) -> Self {
        if count > 0 {
            StatTone::Warning
        } else {
            StatTone::Neutral
        }
    }
}

/// Groups digits of a count with a thin space, `12345` -> `12 345`.
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{2009}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `None` while loading
    #[prop(into)]
    value: Signal<Option<usize>>,
    #[prop(into, optional)] tone: Signal<StatTone>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "-".to_string(),
    };

    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234), "1\u{2009}234");
        assert_eq!(format_count(1234567), "1\u{2009}234\u{2009}567");
    }

    #[test]
    fn tone_warns_only_for_non_zero() {
        assert_eq!(StatTone::alert_if_any(0), StatTone::Neutral);
        assert_eq!(StatTone::alert_if_any(3), StatTone::Warning);
    }
}
