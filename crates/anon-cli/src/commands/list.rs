use anon_engine::get_task_index;
use anyhow::Result;

/// Print every language, country and scope known to the registry
pub fn handle() -> Result<()> {
    let index = get_task_index()?;

    println!("Languages:");
    for lang in index.languages() {
        let countries: Vec<&str> = index.countries(lang).into_iter().collect();
        if countries.is_empty() {
            println!("  {}", lang);
        } else {
            println!("  {} (countries: {})", lang, countries.join(", "));
        }
    }

    for (scope, tasks) in index.scopes() {
        println!("\n[{}]", scope);
        for (task, descriptor) in tasks {
            println!("  {:16} {}", task.name(), descriptor.description());
        }
    }

    Ok(())
}
