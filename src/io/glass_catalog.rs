//! Reader for whitespace-separated glass catalogs.
//!
//! The first line is `<version> <count> <catalog name...>`, followed by one
//! glass per line:
//!
//! ```text
//! N-BK7 1.5168 64.17 2.51 ... 2 6 1.0396 0.2318 1.0105 0.0060 0.0200 103.56 ...
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{error, info, warn};

use crate::glass::{Glass, Laurent, Sellmeier};
use crate::io::cursor::Cursor;
use crate::io::error::{Position, ReadError, Result};

const LAURENT: i64 = 1;
const SELLMEIER: i64 = 2;

/// One catalog glass with its tabulated properties.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    /// Index at the d line.
    pub nd: f64,
    /// Abbe number.
    pub vd: f64,
    pub density: f64,
    pub dn_dt: f64,
    pub tce: f64,
    pub transmittance: f64,
    pub cost: f64,
    pub hardness: f64,
    pub chemical: f64,
    pub glass: Glass<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct GlassCatalog {
    pub version: String,
    pub name: String,
    entries: HashMap<String, CatalogEntry>,
}

impl GlassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut scanner = Scanner::new(input);

        let version = scanner.word("catalog version")?;
        let count: usize = scanner.parse("glass count")?;
        let name = scanner.rest_of_line().trim().to_string();

        let mut catalog = GlassCatalog {
            version,
            name,
            entries: HashMap::new(),
        };
        for _ in 0..count {
            let entry = read_entry(&mut scanner)?;
            catalog.insert(entry);
        }

        info!(
            "read {} glass definitions from '{}'",
            catalog.len(),
            catalog.name
        );
        Ok(catalog)
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// The named glass, or air if the catalog does not know it.
    pub fn glass(&self, name: &str) -> Glass<f64> {
        match self.entries.get(name) {
            Some(entry) => entry.glass,
            None => {
                error!("unknown glass '{}' in catalog '{}', using air", name, self.name);
                Glass::air()
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entry(s: &mut Scanner<'_>) -> Result<CatalogEntry> {
    let name = s.word("glass name")?;
    let nd = s.parse("nd")?;
    let vd = s.parse("vd")?;
    let density = s.parse("density")?;
    let dn_dt = s.parse("dn/dT")?;
    let tce = s.parse("TCE")?;
    let transmittance = s.parse("transmittance")?;
    let cost = s.parse("cost")?;
    let hardness = s.parse("hardness")?;
    let chemical = s.parse("chemical resistance")?;

    // two unlabeled columns
    s.word("column")?;
    s.word("column")?;

    let glass = read_dispersion(s, &name)?;

    s.parse::<i64>("block tag")?;
    s.vector(1)?;
    s.parse::<i64>("block tag")?;
    s.vector(2)?;
    if s.int_follows_on_line() {
        s.parse::<i64>("block tag")?;
        s.vector(1)?;
        for _ in 0..3 {
            s.parse::<i64>("block trailer")?;
        }
    }

    let rest = s.rest_of_line();
    if !rest.trim().is_empty() {
        warn!("expected line break after '{}', but found '{}'", name, rest.trim());
    }

    Ok(CatalogEntry {
        name,
        nd,
        vd,
        density,
        dn_dt,
        tce,
        transmittance,
        cost,
        hardness,
        chemical,
        glass,
    })
}

fn read_dispersion(s: &mut Scanner<'_>, name: &str) -> Result<Glass<f64>> {
    let kind: i64 = s.parse("dispersion formula")?;
    let coeff = s.vector(1)?;

    let glass: Glass<f64> = match (kind, coeff.as_slice()) {
        (LAURENT, &[a0, a1, a2, a3, a4, a5]) => Laurent::new([a0, a1, a2, a3, a4, a5]).into(),
        (SELLMEIER, &[b1, b2, b3, c1, c2, c3]) => Sellmeier::new([b1, b2, b3], [c1, c2, c3]).into(),
        (LAURENT | SELLMEIER, _) => {
            error!(
                "unsupported number of coefficients ({}) for '{}', using air",
                coeff.len(),
                name
            );
            Glass::air()
        }
        _ => {
            error!("unsupported dispersion formula {} for '{}', using air", kind, name);
            Glass::air()
        }
    };
    Ok(glass)
}

/// Whitespace-separated words with line awareness.
struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(input),
        }
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }

    fn word(&mut self, expected: &'static str) -> Result<String> {
        self.cursor.skip_while(char::is_whitespace);
        let word = self.cursor.take_while(|c| !c.is_whitespace());
        if word.is_empty() {
            return Err(ReadError::UnexpectedEof {
                expected,
                position: self.position(),
            });
        }
        Ok(word)
    }

    fn parse<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        self.cursor.skip_while(char::is_whitespace);
        let position = self.position();
        let text = self.word(expected)?;
        text.parse()
            .map_err(|_| ReadError::InvalidNumber { text, position })
    }

    /// `<n>` followed by `n * multiplier` numbers.
    fn vector(&mut self, multiplier: usize) -> Result<Vec<f64>> {
        self.cursor.skip_while(char::is_whitespace);
        let position = self.position();
        let n: usize = self.parse("element count")?;
        let len = n
            .checked_mul(multiplier)
            .ok_or_else(|| ReadError::InvalidNumber {
                text: n.to_string(),
                position,
            })?;
        (0..len)
            .map(|_| self.parse("vector element"))
            .collect()
    }

    /// Whether the next word on the current line is an integer. Consumes
    /// nothing but blanks.
    fn int_follows_on_line(&mut self) -> bool {
        self.cursor.skip_while(|c| c == ' ' || c == '\t' || c == '\r');
        let mut probe = self.cursor.clone();
        let word = probe.take_while(|c| !c.is_whitespace());
        word.parse::<i64>().is_ok()
    }

    /// Consume up to and including the next line break.
    fn rest_of_line(&mut self) -> String {
        let rest = self.cursor.take_while(|c| c != '\n');
        self.cursor.bump();
        rest
    }
}
