// SPDX-License-Identifier: MIT
//
// bingo-print — printable bingo card sheets from the command line.
//
// Wires the workspace crates together:
//
//   bingo-core  → variants, card generation, paging, duplicate guard
//   bingo-theme → named color themes and their CSS variables
//
// Generation produces plain data; this binary is one consumer of it,
// rendering pages as plain-text sheets for a quick look before the web
// front end does the real printing. The same model plus the theme's
// CSS variables drive the printed layout.

use std::env;
use std::process;

use bingo_core::{BingoVariant, Card, Cell, FreeStyle, GenerateOptions, generate};
use bingo_theme::{builtin_names, builtin_theme};

const USAGE: &str = "\
Usage: bingo-print [options]

  --variant <75|90>    game format (default 75)
  --cards <N>          number of cards (default: one full page)
  --theme <name>       color theme: default, purple, blue, green, red
  --free-text <text>   75-ball center label (default FREE)
  --free-glyph         75-ball center star instead of text
  --no-free-space      keep all 25 numbers
  --allow-repeats      draw every card's columns independently
  --help               show this help
";

// ─── Argument parsing ────────────────────────────────────────────────────────

/// Parsed command line: generation parameters plus the theme name.
struct CliOptions {
    generate: GenerateOptions,
    theme: String,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut variant = BingoVariant::SeventyFive;
    let mut cards: Option<i32> = None;
    let mut theme = String::from("default");
    let mut free_text: Option<String> = None;
    let mut free_glyph = false;
    let mut no_free_space = false;
    let mut allow_repeats = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--variant" => {
                let value = iter.next().ok_or("--variant needs a value")?;
                variant = BingoVariant::from_name(value)
                    .ok_or_else(|| format!("unknown variant '{value}' (expected 75 or 90)"))?;
            }
            "--cards" => {
                let value = iter.next().ok_or("--cards needs a value")?;
                cards = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid card count '{value}'"))?,
                );
            }
            "--theme" => theme = iter.next().ok_or("--theme needs a value")?.clone(),
            "--free-text" => {
                free_text = Some(iter.next().ok_or("--free-text needs a value")?.clone());
            }
            "--free-glyph" => free_glyph = true,
            "--no-free-space" => no_free_space = true,
            "--allow-repeats" => allow_repeats = true,
            other => return Err(format!("unknown option '{other}'")),
        }
    }

    let mut options = GenerateOptions::for_variant(variant);
    if let Some(count) = cards {
        options.card_count = count;
    }
    options.free_space = if no_free_space || !variant.has_free_space() {
        None
    } else if free_glyph {
        Some(FreeStyle::glyph())
    } else if let Some(text) = free_text {
        Some(FreeStyle::text(&text))
    } else {
        Some(FreeStyle::default())
    };
    options.allow_repeats_within_pool = allow_repeats;

    Ok(CliOptions {
        generate: options,
        theme,
    })
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Column width of one rendered cell.
const CELL_WIDTH: usize = 5;

/// What one cell prints as. Free-space text is clipped to the cell.
fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Blank => String::new(),
        Cell::Number(n) => n.to_string(),
        Cell::Free(style) => style.content().chars().take(CELL_WIDTH - 1).collect(),
    }
}

/// One card as a plain-text block.
fn render_card(card: &Card) -> String {
    let grid = card.grid();
    let mut out = format!("Card #{}\n", card.id());
    if grid.variant() == BingoVariant::SeventyFive {
        for letter in ["B", "I", "N", "G", "O"] {
            out.push_str(&format!("{letter:^CELL_WIDTH$}"));
        }
        out.push('\n');
    }
    for row in 0..grid.rows() {
        for cell in grid.row(row) {
            out.push_str(&format!("{:^CELL_WIDTH$}", cell_text(cell)));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help") {
        print!("{USAGE}");
        return;
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("bingo-print: {e}");
            eprint!("{USAGE}");
            process::exit(1);
        }
    };

    let Some(theme) = builtin_theme(&cli.theme) else {
        eprintln!(
            "bingo-print: unknown theme '{}' (try: {})",
            cli.theme,
            builtin_names().join(", ")
        );
        process::exit(1);
    };

    let mut rng = rand::thread_rng();
    let pages = generate(&mut rng, &cli.generate);
    if pages.is_empty() {
        println!("Nothing to print: ask for at least one card.");
        return;
    }

    for (index, page) in pages.iter().enumerate() {
        println!("═══ Page {}/{} ═══\n", index + 1, pages.len());
        for card in page.cards() {
            print!("{}", render_card(card));
        }
    }

    println!("Theme '{}':", theme.name);
    for (name, value) in theme.css_variables() {
        println!("  {name}: {value};");
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, String> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        parse_args(&args)
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    #[test]
    fn no_args_is_the_stock_page() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.generate, GenerateOptions::default());
        assert_eq!(cli.theme, "default");
    }

    #[test]
    fn variant_switch_changes_the_default_count() {
        let cli = parse(&["--variant", "90"]).unwrap();
        assert_eq!(cli.generate.variant, BingoVariant::Ninety);
        assert_eq!(cli.generate.card_count, 8);
        assert_eq!(cli.generate.free_space, None);
    }

    #[test]
    fn explicit_count_overrides_the_default() {
        let cli = parse(&["--cards", "27"]).unwrap();
        assert_eq!(cli.generate.card_count, 27);
    }

    #[test]
    fn free_space_options_combine() {
        let cli = parse(&["--free-text", "lucky you"]).unwrap();
        assert_eq!(cli.generate.free_space, Some(FreeStyle::text("LUCKY YOU")));

        let cli = parse(&["--free-glyph"]).unwrap();
        assert_eq!(cli.generate.free_space, Some(FreeStyle::glyph()));

        let cli = parse(&["--no-free-space"]).unwrap();
        assert_eq!(cli.generate.free_space, None);
    }

    #[test]
    fn ninety_never_gets_a_free_space() {
        let cli = parse(&["--variant", "90", "--free-text", "FREE"]).unwrap();
        assert_eq!(cli.generate.free_space, None);
    }

    #[test]
    fn repeats_flag_is_parsed() {
        let cli = parse(&["--allow-repeats"]).unwrap();
        assert!(cli.generate.allow_repeats_within_pool);
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn missing_values_are_rejected() {
        assert!(parse(&["--variant"]).is_err());
        assert!(parse(&["--cards"]).is_err());
        assert!(parse(&["--cards", "many"]).is_err());
        assert!(parse(&["--variant", "80"]).is_err());
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    #[test]
    fn cell_text_covers_all_kinds() {
        assert_eq!(cell_text(&Cell::Blank), "");
        assert_eq!(cell_text(&Cell::Number(42)), "42");
        assert_eq!(cell_text(&Cell::Free(FreeStyle::glyph())), "★");
        // Long labels are clipped to the cell.
        assert_eq!(cell_text(&Cell::Free(FreeStyle::text("JACKPOT"))), "JACK");
    }

    #[test]
    fn rendered_card_has_header_and_rows() {
        let columns: Vec<Vec<u8>> = vec![
            vec![1, 2, 3, 4, 5],
            vec![16, 17, 18, 19, 20],
            vec![31, 32, 33, 34, 35],
            vec![46, 47, 48, 49, 50],
            vec![61, 62, 63, 64, 65],
        ];
        let grid = bingo_core::layout::seventy_five_from_columns(&columns, None);
        let text = render_card(&Card::new(3, grid));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Card #3");
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["B", "I", "N", "G", "O"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            ["1", "16", "31", "46", "61"]
        );
        // Title + header + 5 rows + the trailing blank separator.
        assert_eq!(lines.len(), 8);
        assert!(lines[7].is_empty());
    }
}
