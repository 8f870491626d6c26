#[cfg(test)]
mod tests;

use anyhow::bail;
use log::debug;
use regfile_common::{Prettier, RegisterCode, RegisterConfiguration, Representation};

/// Describe every register class of the configuration, ending in a newline.
pub fn show(config: &RegisterConfiguration) -> String {
    let prettier = Prettier::new(config);
    let mut res = prettier.pretty_configuration();
    res.push('\n');
    res
}

/// Describe the registers of `other_rep` aliased by register `index` of
/// `rep`, e.g. `d3 -> s6 s7`.
pub fn alias(
    config: &RegisterConfiguration,
    rep: Representation,
    index: RegisterCode,
    other_rep: Representation,
) -> anyhow::Result<String> {
    let count = register_count(config, rep);
    if index >= count {
        bail!("{rep} register {index} does not exist (there are {count})");
    }

    let aliases = config.get_aliases(rep, index, other_rep);
    let limit = register_count(config, other_rep);
    debug!("{rep} {index} aliases {aliases:?} of {other_rep}");

    let codes: Vec<_> = aliases.iter().filter(|code| *code < limit).collect();
    let names = Prettier::new(config).pretty_registers(other_rep, &codes);

    Ok(format!("{} -> {names}", config.register_name(rep, index)))
}

fn register_count(config: &RegisterConfiguration, rep: Representation) -> usize {
    match rep {
        Representation::General => config.num_general_registers(),
        Representation::Float32 => config.num_float_registers(),
        Representation::Float64 => config.num_double_registers(),
    }
}
