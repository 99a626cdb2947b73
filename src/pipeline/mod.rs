pub mod stage1_scores;
pub mod stage2_classify;
pub mod stage3_pairs;
pub mod stage4_report;
