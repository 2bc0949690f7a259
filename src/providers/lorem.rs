use crate::error::TemplateError;
use crate::locale::LOREM_WORDS;

use super::call::{BoundArgs, ParamSpec};
use super::registry::{GenContext, GeneratorDescriptor, ProviderDef};
use super::value::Scalar;

pub static PROVIDER: ProviderDef = ProviderDef {
    name: "LOREM",
    methods: &[
        GeneratorDescriptor { name: "word", params: &[], generate: word },
        GeneratorDescriptor {
            name: "words",
            params: &[ParamSpec::positional("nb", "int", "3")],
            generate: words,
        },
        GeneratorDescriptor {
            name: "sentence",
            params: &[ParamSpec::positional("nb_words", "int", "6")],
            generate: sentence,
        },
        GeneratorDescriptor {
            name: "paragraph",
            params: &[ParamSpec::positional("nb_sentences", "int", "3")],
            generate: paragraph,
        },
        GeneratorDescriptor {
            name: "text",
            params: &[ParamSpec::positional("max_nb_chars", "int", "200")],
            generate: text,
        },
    ],
};

/// Shortest text the `text` generator accepts.
const MIN_TEXT_CHARS: usize = 5;
const MAX_TEXT_CHARS: usize = 100_000;
const MAX_WORDS: usize = 1_000;
const MAX_SENTENCES: usize = 100;

fn word_list(ctx: &mut GenContext<'_>, count: usize) -> Vec<&'static str> {
    (0..count).map(|_| ctx.pick(LOREM_WORDS)).collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sentence_text(ctx: &mut GenContext<'_>, nb_words: usize) -> String {
    if nb_words == 0 {
        return String::new();
    }
    let body = word_list(ctx, nb_words).join(" ");
    format!("{}.", capitalize(&body))
}

fn paragraph_text(ctx: &mut GenContext<'_>, nb_sentences: usize) -> String {
    let sentences: Vec<String> = (0..nb_sentences)
        .map(|_| {
            let nb_words = usize::try_from(ctx.int_in(4, 10)).unwrap_or(6);
            sentence_text(ctx, nb_words)
        })
        .collect();
    sentences.join(" ")
}

fn word(ctx: &mut GenContext<'_>, _args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    Ok(ctx.pick(LOREM_WORDS).into())
}

fn words(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let nb = args.count_max("nb", MAX_WORDS)?;
    Ok(word_list(ctx, nb).join(" ").into())
}

fn sentence(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let nb_words = args.count_max("nb_words", MAX_WORDS)?;
    Ok(sentence_text(ctx, nb_words).into())
}

fn paragraph(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let nb_sentences = args.count_max("nb_sentences", MAX_SENTENCES)?;
    Ok(paragraph_text(ctx, nb_sentences).into())
}

/// Sentences appended while they fit in `max_nb_chars`.
fn text(ctx: &mut GenContext<'_>, args: &BoundArgs<'_>) -> Result<Scalar, TemplateError> {
    let max_chars = args.count_max("max_nb_chars", MAX_TEXT_CHARS)?;
    if max_chars < MIN_TEXT_CHARS {
        return Err(TemplateError::invalid_argument(
            args.method(),
            "max_nb_chars",
            format!("must be >= {}", MIN_TEXT_CHARS),
        ));
    }
    let mut output = String::new();
    loop {
        let nb_words = usize::try_from(ctx.int_in(3, 8)).unwrap_or(6);
        let next = sentence_text(ctx, nb_words);
        let separator = usize::from(!output.is_empty());
        let needed = output
            .chars()
            .count()
            .saturating_add(separator)
            .saturating_add(next.chars().count());
        if needed > max_chars {
            break;
        }
        if separator > 0 {
            output.push(' ');
        }
        output.push_str(&next);
    }
    if output.is_empty() {
        let word = capitalize(ctx.pick(LOREM_WORDS));
        output = word.chars().take(max_chars.saturating_sub(1)).collect();
        output.push('.');
    }
    Ok(output.into())
}
