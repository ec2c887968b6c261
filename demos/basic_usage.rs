//! Basic build -> rank -> explain flow.

use rankbase::*;

fn main() -> RankResult<()> {
    env_logger::init();

    // Assemble a small record set
    let store = StoreBuilder::new()
        .record(
            EntityRecord::builder("python")
                .title("Python")
                .entity_type("pl")
                .series("linkedInSkill", [(2020, 41_000), (2021, 49_000)])
                .series("indeedJobs", [(2021, 1_300)])
                .int("githubRepo stars", 50_000)
                .text(
                    "wikipedia",
                    "https://en.wikipedia.org/wiki/Python_(programming_language)",
                )
                .link("c")
                .build(),
        )
        .record(
            EntityRecord::builder("c")
                .title("C")
                .entity_type("pl")
                .series("linkedInSkill", [(2021, 30_000)])
                .series("indeedJobs", [(2021, 900)])
                .text("wikipedia", "https://en.wikipedia.org/wiki/C_(programming_language)")
                .build(),
        )
        .record(
            EntityRecord::builder("sqlite")
                .title("SQLite")
                .entity_type("library")
                .int("githubRepo stars", 4_000)
                .link("c")
                .build(),
        )
        .build()?;

    let engine = RankingEngine::new(store);

    // Full leaderboard
    for entry in engine.top_ranked(Scope::Global, 10)? {
        println!(
            "#{} {} (total rank {}, ~{} users)",
            entry.index + 1,
            entry.id,
            entry.total_rank,
            entry.signals.users
        );
    }

    // One entity's breakdown, human and machine readable
    let explanation = engine.explain("python", Scope::Language)?;
    println!("{}", explanation);
    println!("{}", serde_json::to_string_pretty(&explanation).unwrap());

    // Navigation
    println!("percentile: {:.2}", engine.percentile("python")?);
    println!("next ranked: {}", engine.next_ranked("python", Scope::Global)?);

    Ok(())
}
