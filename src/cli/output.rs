//! Console formatting helpers for CLI commands

use crate::pipeline::TrainingResult;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print the outcome counts of a training run
pub fn print_training_result(result: &TrainingResult) {
    print_section("Training Summary");
    print_kv("Episodes", &format_number(result.total_episodes));
    print_kv(
        "Goals",
        &format!("{} ({:.1}%)", result.goals, result.goal_rate * 100.0),
    );
    print_kv(
        "Traps",
        &format!("{} ({:.1}%)", result.traps, result.trap_rate * 100.0),
    );
    print_kv(
        "Timeouts",
        &format!("{} ({:.1}%)", result.timeouts, result.timeout_rate * 100.0),
    );
    if let Some(episode) = result.first_goal_episode {
        print_kv("First goal", &format!("episode {episode}"));
    }
    if let Some(mean) = result.mean_steps_to_goal {
        print_kv("Mean steps to goal", &format!("{mean:.1}"));
    }
}
