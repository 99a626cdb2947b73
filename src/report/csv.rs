use crate::model::ActivityScore;
use crate::report::{format_f64_2, quote_csv};

pub const SCORES_HEADER: &str =
    "Activity,Category,Group Average,Disagreement,Together Score,Separate Score";

pub fn render_scores_csv(scores: &[ActivityScore]) -> String {
    let mut rows = Vec::with_capacity(scores.len() + 1);
    rows.push(SCORES_HEADER.to_string());
    for s in scores {
        rows.push(
            [
                quote_csv(&s.activity.name),
                quote_csv(&s.activity.category),
                format_f64_2(s.group_average),
                format_f64_2(s.disagreement),
                format_f64_2(s.together_score),
                format_f64_2(s.separate_score),
            ]
            .join(","),
        );
    }
    rows.join("\n")
}
