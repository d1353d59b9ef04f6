//! Load, sort, filter, check and write in one pass.

use std::path::PathBuf;

use crate::duplicate::find_duplicate;
use crate::exclude::ExclusionSet;
use crate::loader::AddressLoader;
use crate::sort::sort_addresses;
use crate::writer::AddressWriter;
use crate::{Address, Error, Options, Result};

/// Counts from a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Addresses parsed from the input file
    pub loaded: usize,
    /// Addresses dropped by the exclusion set
    pub excluded: usize,
    /// Units written to the output file
    pub written: usize,
    pub output: PathBuf,
}

/// Load, sort and filter the input without writing anything.
///
/// Fails with [`Error::DuplicateAddress`] if an IPv4 address survives
/// filtering more than once.
pub fn prepare(options: &Options) -> Result<(Vec<Address>, usize)> {
    let exclusions = match &options.exclude {
        Some(path) => {
            let set = ExclusionSet::from_addresses(&AddressLoader::load_file(path)?);
            log::debug!("Exclusion set has {} addresses", set.len());
            Some(set)
        }
        None => None,
    };

    let addresses = sort_addresses(AddressLoader::load_file(&options.input)?);
    let loaded = addresses.len();

    let addresses = match &exclusions {
        Some(set) => set.filter(addresses),
        None => addresses,
    };
    let excluded = loaded - addresses.len();
    if excluded > 0 {
        log::info!("Excluded {} addresses", excluded);
    }

    if let Some(dup) = find_duplicate(&addresses) {
        return Err(Error::DuplicateAddress(dup));
    }

    Ok((addresses, excluded))
}

/// Run the whole pipeline.
///
/// The output file is only created once the list has passed the duplicate
/// check.
pub fn run(options: &Options) -> Result<RunSummary> {
    let (addresses, excluded) = prepare(options)?;

    let written = AddressWriter::new(options.format)
        .with_progress(options.progress)
        .write_file(&options.output, &addresses)?;

    Ok(RunSummary {
        loaded: addresses.len() + excluded,
        excluded,
        written,
        output: options.output.clone(),
    })
}
