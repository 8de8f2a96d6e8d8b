use colored::Colorize;

use iching_reading::{InterpretationRequest, Question, Reading, ReadingConfig};

pub fn run(question: &str, config: &ReadingConfig, json: bool) -> Result<(), String> {
    let question = Question::parse(question).map_err(|e| e.to_string())?;
    let corpus = super::load_corpus(config)?;

    let mut rng = config.rng();
    let reading = Reading::cast(Some(question), &mut rng);
    let request = InterpretationRequest::from_reading(&reading).map_err(|e| e.to_string())?;
    let messages = request.messages(corpus.as_ref());

    if json {
        let payload = serde_json::json!({
            "request": request,
            "messages": messages,
        });
        let out = serde_json::to_string_pretty(&payload)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    for message in &messages {
        let role = format!("[{}]", message.role);
        println!("{}", role.bold());
        println!("{}", message.content.trim_end());
        println!();
    }
    Ok(())
}
