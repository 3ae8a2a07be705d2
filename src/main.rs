// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stemma CLI entrypoint.
//!
//! By default this reads a family-tree JSON snapshot, computes the banded
//! layout, and writes an SVG document to stdout (or `--out`).
//!
//! Use `--check` to audit every stored relation for age plausibility instead
//! of rendering.

use std::error::Error;
use std::io::Write as _;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <tree.json> [--out <file>] [--width <px>]\n  {program} <tree.json> --check\n\nRender mode (default) writes an SVG document to stdout, or to <file> with --out.\n--width overrides the canvas width in pixels (must be greater than zero).\n\n--check prints one line per age-implausible relation and exits with status 1\nif any are found. It cannot be combined with --out or --width."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    input: Option<String>,
    out: Option<String>,
    width: Option<u32>,
    check: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                if options.out.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.out = Some(file);
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let width: u32 = raw.parse().map_err(|_| ())?;
                if width == 0 {
                    return Err(());
                }
                options.width = Some(width);
            }
            "--check" => {
                if options.check {
                    return Err(());
                }
                options.check = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.input.is_none() {
        return Err(());
    }

    if options.check && (options.out.is_some() || options.width.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn run_check(tree: &stemma::model::FamilyTree) -> bool {
    let mut clean = true;
    for (relation_id, relation) in tree.relations() {
        let source = tree.memorial(relation.from_memorial_id());
        let target = tree.memorial(relation.to_memorial_id());
        let (Some(source), Some(target)) = (source, target) else {
            continue;
        };
        let objection = stemma::validate::check_age_compatibility(
            source.birth_date(),
            target.birth_date(),
            relation.kind(),
        );
        if let Some(objection) = objection {
            println!(
                "relation {relation_id} ({} -> {}): {objection}",
                source.name(),
                target.name()
            );
            clean = false;
        }
    }
    clean
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "stemma".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let input = options.input.expect("parse_options requires an input path");
        let src = std::fs::read_to_string(&input)
            .map_err(|err| format!("failed to read `{input}`: {err}"))?;
        let tree = stemma::format::parse_tree(&src)?;

        if options.check {
            if !run_check(&tree) {
                std::process::exit(1);
            }
            return Ok(());
        }

        let mut config = stemma::layout::LayoutConfig::default();
        if let Some(width) = options.width {
            config = config.with_canvas_width(width as f32);
        }
        let layout = stemma::layout::compute_layout(&tree, &config);
        let svg = stemma::render::render_svg(&layout, &stemma::render::SvgOptions::default());

        match options.out {
            Some(out) => std::fs::write(&out, svg)
                .map_err(|err| format!("failed to write `{out}`: {err}"))?,
            None => {
                let stdout = std::io::stdout();
                stdout.lock().write_all(svg.as_bytes())?;
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("stemma: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_options;

    #[test]
    fn rejects_empty_args() {
        parse_options(std::iter::empty()).unwrap_err();
    }

    #[test]
    fn parses_input_path() {
        let options = parse_options(["tree.json".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.input.as_deref(), Some("tree.json"));
        assert!(options.out.is_none());
        assert_eq!(options.width, None);
        assert!(!options.check);
    }

    #[test]
    fn parses_out_file() {
        let options = parse_options(
            ["tree.json".to_owned(), "--out".to_owned(), "tree.svg".to_owned()].into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.out.as_deref(), Some("tree.svg"));
    }

    #[test]
    fn parses_width() {
        let options = parse_options(
            ["tree.json".to_owned(), "--width".to_owned(), "1440".to_owned()].into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.width, Some(1440));
    }

    #[test]
    fn parses_check_flag() {
        let options = parse_options(["tree.json".to_owned(), "--check".to_owned()].into_iter())
            .expect("parse options");
        assert!(options.check);
    }

    #[test]
    fn rejects_zero_width() {
        parse_options(
            ["tree.json".to_owned(), "--width".to_owned(), "0".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_check_with_render_flags() {
        parse_options(
            ["tree.json".to_owned(), "--check".to_owned(), "--out".to_owned(), "x.svg".to_owned()]
                .into_iter(),
        )
        .unwrap_err();

        parse_options(
            ["tree.json".to_owned(), "--check".to_owned(), "--width".to_owned(), "800".to_owned()]
                .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["tree.json".to_owned(), "--nope".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(
            ["tree.json".to_owned(), "--check".to_owned(), "--check".to_owned()].into_iter(),
        )
        .unwrap_err();

        parse_options(
            [
                "tree.json".to_owned(),
                "--out".to_owned(),
                "a.svg".to_owned(),
                "--out".to_owned(),
                "b.svg".to_owned(),
            ]
            .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_multiple_input_paths() {
        parse_options(["one.json".to_owned(), "two.json".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_missing_out_value() {
        parse_options(["tree.json".to_owned(), "--out".to_owned()].into_iter()).unwrap_err();
    }
}
