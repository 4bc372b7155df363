pub fn run(text: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut dispatcher = super::dispatcher(seed);

    if json {
        let results = dispatcher.evaluate(text).map_err(|e| e.to_string())?;
        let rendered = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    if let Some(reply) = dispatcher.reply(text).map_err(|e| e.to_string())? {
        println!("{reply}");
    }
    Ok(())
}
