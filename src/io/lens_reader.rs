//! Reader for keyword-based lens description files.
//!
//! ```text
//! LEN NEW "Singlet" 100 3
//! DES "Example"
//! WV 0.58756
//! TH 1e+20 AIR
//! NXT RD 60 TH 5 AP CHK 20 GLA N-BK7
//! NXT RD -500 TH 70 AP CHK 20 AIR
//! END 1
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use crate::io::error::Result;
use crate::io::lexer::{Lexer, TokenKind};
use crate::io::schema::{LensSchema, SurfaceSchema, WeightedWavelength};

#[derive(Clone, Copy, Debug, Default)]
pub struct LensReader;

impl LensReader {
    pub fn new() -> Self {
        LensReader
    }

    /// Read every lens defined in `input`.
    pub fn read(&self, input: &str) -> Result<Vec<LensSchema>> {
        let mut lexer = Lexer::new(input);
        let mut lenses = Vec::new();

        while let Some(token) = lexer.next_token()? {
            match token.kind {
                TokenKind::Comment => {
                    debug!("comment: {}", token.text.trim());
                    continue;
                }
                TokenKind::Keyword => {}
                kind => {
                    warn!("unexpected {} '{}' at {}", kind, token.text, token.position);
                    continue;
                }
            }

            match token.text.as_str() {
                "LEN" => lenses.push(read_lens(&mut lexer)?),
                "DLRS" => {
                    lexer.expect_int()?;
                }
                "DLNR" => {
                    lexer.expect_int()?;
                    lexer.expect_int()?;
                }
                "DLAS" => {
                    lexer.expect(TokenKind::Keyword)?;
                }
                other => {
                    warn!("unknown keyword '{}' at {}", other, token.position);
                    lexer.skip_arguments()?;
                }
            }
        }

        Ok(lenses)
    }

    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Vec<LensSchema>> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.read(&input)
    }

    pub fn open(&self, path: impl AsRef<Path>) -> Result<Vec<LensSchema>> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)?;
        let lenses = self.read(&input)?;
        info!("read {} lens(es) from {}", lenses.len(), path.display());
        Ok(lenses)
    }
}

fn read_lens(lexer: &mut Lexer<'_>) -> Result<LensSchema> {
    let mut lens = LensSchema::default();

    lexer.expect_keyword("NEW")?;
    lens.name = lexer.expect_string()?;
    lens.design_efl = lexer.expect_float()?;
    let declared = lexer.expect_int()?;

    let mut surface = SurfaceSchema::default();
    loop {
        let token = lexer.expect(TokenKind::Keyword)?;
        match token.text.as_str() {
            // lens
            "EBR" => lens.entrance_beam_radius = lexer.expect_float()?,
            "ANG" => lens.field_angle = lexer.expect_float()?,
            "DES" => lens.description = lexer.expect_string()?,
            "UNI" => lens.units = lexer.expect_float()?,

            // surface
            "AIR" => surface.glass_name = None,
            "GLA" => surface.glass_name = Some(lexer.expect(TokenKind::Keyword)?.text),
            "RD" => surface.radius = lexer.expect_float()?,
            "TH" => surface.thickness = lexer.expect_float()?,
            "AP" => {
                surface.check_aperture = lexer.peek() == Some(TokenKind::Keyword);
                if surface.check_aperture {
                    lexer.expect_keyword("CHK")?;
                }
                surface.aperture = lexer.expect_float()?;
            }
            "DRW" => {
                lexer.expect(TokenKind::Keyword)?;
            }
            "CBK" => {
                lexer.expect_int()?;
            }

            // wavelengths
            "WV" => {
                while lexer.peek() == Some(TokenKind::Number) {
                    let wavelength = lexer.expect_float()?;
                    lens.wavelengths.push(WeightedWavelength::new(wavelength, 1.0));
                }
            }
            "WW" => {
                let mut i = 0;
                while lexer.peek() == Some(TokenKind::Number) {
                    let weight = lexer.expect_float()?;
                    match lens.wavelengths.get_mut(i) {
                        Some(w) => w.weight = weight,
                        None => warn!(
                            "too many wavelength weights in '{}', dropping {}",
                            lens.name, weight
                        ),
                    }
                    i += 1;
                }
            }

            // flow
            "NXT" => lens.surfaces.push(std::mem::take(&mut surface)),
            "END" => {
                lexer.expect_int()?;
                lens.surfaces.push(surface);
                break;
            }

            other => {
                warn!("unknown lens keyword '{}' at {}", other, token.position);
                lexer.skip_arguments()?;
            }
        }
    }

    if usize::try_from(declared).ok() != Some(lens.surfaces.len()) {
        warn!(
            "lens '{}' declares {} surfaces but defines {}",
            lens.name,
            declared,
            lens.surfaces.len()
        );
    }

    Ok(lens)
}
