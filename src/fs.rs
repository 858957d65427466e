use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::config::Format;
use crate::level::Level;
use crate::parser;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = read_file(self)?;
        let format = parser::detect_format(&text);
        debug!("Detected {} format in {}", format, self.as_ref().display());
        Ok(parser::parse_format(&text, format)?)
    }

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse_format(&text, format)?)
    }
}
