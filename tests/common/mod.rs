use cipherbreak::model::{corpus, loader, LanguageModels, NgramModel};

/// A plain English passage long enough for statistical key recovery.
pub const PASSAGE: &str = "The old lighthouse keeper climbed the narrow stairs \
every evening just before dusk. From the top he could watch the fishing boats \
return to the harbour, their lanterns swinging gently with the swell. In \
winter the storms threw spray over the rocks and the lamp had to burn through \
the night without fail. He kept a log of every ship that passed, noting the \
weather, the tide, and the direction of the wind. It was quiet work, but he \
had grown to love the rhythm of it, and he could not imagine another life.";

pub fn trained_model(n: usize) -> NgramModel {
    let table = corpus::generate_table(PASSAGE, n);
    let entries = loader::read_table(table.as_bytes(), b' ').expect("table should parse");
    NgramModel::from_counts(entries).expect("model should build")
}

pub fn trained_models() -> LanguageModels {
    LanguageModels::from_models(trained_model(2), trained_model(3), trained_model(4))
        .expect("orders should match")
}
