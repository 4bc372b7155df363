use comfy_table::{ContentArrangement, Table};

const GRAMMARS: &[(&str, &str, &str)] = &[
    ("Standard", "3d6+2", "Sum of dice plus modifier"),
    ("Multiple", "3#2d6", "The same roll repeated, one sum each"),
    ("Shadowrun", "5#sd", "d6 pool, hits on 5+"),
    ("Shadowrun exploding", "5#sdx", "Sixes roll again"),
    (
        "Shadowrun extended",
        "5,12#sde",
        "Passes until the hit threshold is reached",
    ),
    (
        "Raise roll (7th Sea 2ed)",
        "8s3x",
        "Skill 0-5; x explodes, lN lashes low dice, j is joie de vivre",
    ),
    (
        "Keep roll (7th Sea)",
        "4k2+1",
        "Roll d10s, keep the highest; kk or + shows the rest, - stops explosion",
    ),
    (
        "World of Darkness",
        "6w9",
        "d10 pool, successes on 8+; 8/9-again, - stops explosion",
    ),
    ("Versus", "2vs(20+30-10)", "d100 margins against a threshold"),
];

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Grammar", "Example", "Meaning"]);
    for (grammar, example, meaning) in GRAMMARS {
        table.add_row(vec![*grammar, *example, *meaning]);
    }
    println!("{table}");
    Ok(())
}
