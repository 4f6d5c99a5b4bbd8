use rand::SeedableRng;
use rand::rngs::StdRng;

use markovwiki_core::model::generator::TextGenerator;
use markovwiki_core::model::transition_table::ModelBuilder;
use markovwiki_core::text::sanitizer::sanitize;
use markovwiki_core::text::sentence::assert_has_sentence;

// A short article in wiki markup, standing in for text fetched from a wiki.
const ARTICLE: &str = "{{Infobox settlement|name=Riverton|population=4120}}\n\
'''Riverton''' is a small town on the [[Green River|river]].<ref>Gazetteer of Towns, p. 88</ref> It was settled in 1851. It grew around a ford used by traders.\n\
\n\
== History ==\n\
The first bridge opened in 1887.<ref name=\"bridge\">Bridge registry</ref> It washed away twice. The crossing in use today dates from 1923.\n\
\n\
The town holds a fair on the river each June. Visitors come from the whole valley.\n\
[[Category:Fictional towns]]\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Strip the markup; the sanitizer is total and never fails
    let text = sanitize(ARTICLE);
    println!("--- sanitized article ---\n{}", text.trim());

    // The validation gate: a text with no detectable sentence cannot seed
    // the chain and is rejected before any table is built
    assert_has_sentence(&text)?;
    match assert_has_sentence("no sentence here") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\nAs expected, a sentence-free text is rejected: {e}"),
    }

    // Build the transition table with a past state of 2 words
    // (from_article runs sanitize + validate + parse in one call)
    let table = ModelBuilder::from_article(ARTICLE, 2)?;
    println!("\nTransition table holds {} states", table.len());

    // A seeded generator replays the same text on every run; swap in
    // StdRng::from_os_rng() for fresh output
    let mut generator = TextGenerator::new(StdRng::seed_from_u64(1851));

    // Generate 5 sentences
    let generated = generator.generate(&table, 5)?;
    println!("\n--- generated text ---\n{generated}");

    Ok(())
}
