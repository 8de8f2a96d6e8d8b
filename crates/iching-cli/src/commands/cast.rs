use iching_reading::{Question, Reading, ReadingConfig};

use super::Format;

pub fn run(question: Option<&str>, config: &ReadingConfig, format: Format) -> Result<(), String> {
    let question = question
        .map(Question::parse)
        .transpose()
        .map_err(|e| e.to_string())?;
    let corpus = super::load_corpus(config)?;

    let mut rng = config.rng();
    let reading = Reading::cast(question, &mut rng);

    super::emit(&reading, corpus.as_ref(), format)
}
