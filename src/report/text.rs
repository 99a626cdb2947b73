use crate::model::{Activity, ActivityScore};
use crate::pipeline::stage3_pairs::PairSuggestion;
use crate::report::{format_day, format_f64_2, format_year};
use crate::schedule::{DaySlot, Half, Schedule, SlotWarning};

#[derive(Debug, Clone)]
pub struct TextReportContext<'a> {
    pub trip_start: chrono::NaiveDate,
    pub trip_end: chrono::NaiveDate,
    pub together: &'a [&'a ActivityScore],
    pub separate: &'a [&'a ActivityScore],
    pub pair_suggestions: &'a [PairSuggestion],
    pub activities: &'a [Activity],
    pub day_slots: &'a [DaySlot],
    pub schedule: &'a Schedule,
    pub warnings: &'a [SlotWarning],
    pub top_n: usize,
}

pub fn render_recommendations_text(ctx: &TextReportContext<'_>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Trip window: {} (PM) to {} (AM), {}",
        format_day(ctx.trip_start),
        format_day(ctx.trip_end),
        format_year(ctx.trip_start)
    ));
    lines.push(String::new());

    lines.push("Best for all together:".to_string());
    for (i, r) in ctx.together.iter().take(ctx.top_n).enumerate() {
        lines.push(format!(
            "{}. {} (group avg {})",
            i + 1,
            r.activity.name,
            format_f64_2(r.group_average)
        ));
    }
    lines.push(String::new());

    lines.push("Better as separate family time:".to_string());
    for (i, r) in ctx.separate.iter().take(ctx.top_n).enumerate() {
        lines.push(format!(
            "{}. {} (disagreement {})",
            i + 1,
            r.activity.name,
            format_f64_2(r.disagreement)
        ));
    }
    lines.push(String::new());

    lines.push("Two-family subgroups:".to_string());
    for p in ctx.pair_suggestions {
        let names = p
            .top_activities
            .iter()
            .map(|a| a.activity.as_str())
            .collect::<Vec<_>>();
        lines.push(format!("{} + {}: {}", p.family_a, p.family_b, names.join(", ")));
    }
    lines.push(String::new());

    lines.push("Schedule:".to_string());
    for slot in ctx.day_slots {
        lines.push(format!(
            "{} - AM: {}, PM: {}",
            format_day(slot.date),
            slot_label(ctx, slot, Half::Am),
            slot_label(ctx, slot, Half::Pm)
        ));
    }

    if !ctx.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for w in ctx.warnings {
            lines.push(format!(
                "{} {}: some families marked {} as family-only",
                format_day(w.date),
                w.half.label(),
                w.half.label()
            ));
        }
    }

    lines.join("\n")
}

fn slot_label<'a>(ctx: &'a TextReportContext<'_>, slot: &DaySlot, half: Half) -> &'a str {
    if !slot.enabled(half) {
        return "Disabled";
    }
    match ctx.schedule.get(&slot.date).and_then(|row| row.get(half)) {
        None => "None",
        Some(id) => ctx
            .activities
            .iter()
            .find(|a| &a.id == id)
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown"),
    }
}
