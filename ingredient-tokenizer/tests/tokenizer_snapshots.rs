//! Snapshot tests of the intermediate pipeline output for sample ingredient lists

use ingredient_tokenizer::ingredient::loader::PhraseLoader;

const PANCAKES: &str = "\
1 1/2 cups/190 grams all-purpose flour
3 1/2 tsp. baking powder
1 Tbsp. white sugar
1 1/4 cups/300ml milk
1 egg (optional), beaten
";

#[test]
fn pancake_tokens() {
    let tokenized = PhraseLoader::from_string(PANCAKES).tokenize().unwrap();
    let tokens: Vec<Vec<String>> = tokenized.into_iter().map(|t| t.tokens).collect();

    insta::assert_debug_snapshot!(tokens, @r###"
    [
        [
            "1$1/2",
            "cups",
            "190",
            "grams",
            "all-purpose",
            "flour",
        ],
        [
            "3$1/2",
            "teaspoons",
            "baking",
            "powder",
        ],
        [
            "1",
            "tablespoons",
            "white",
            "sugar",
        ],
        [
            "1$1/4",
            "cups",
            "300",
            "milliliters",
            "milk",
        ],
        [
            "1",
            "egg",
            ",",
            "beaten",
        ],
    ]
    "###);
}

#[test]
fn pancake_clumped_phrases() {
    let clumped = PhraseLoader::from_string(PANCAKES).clump().unwrap();

    insta::assert_debug_snapshot!(clumped, @r###"
    [
        "1$1/2 cups 190 grams all-purpose flour",
        "3$1/2 teaspoons baking powder",
        "1 tablespoons white sugar",
        "1$1/4 cups 300 milliliters milk",
        "1 egg , beaten",
    ]
    "###);
}
