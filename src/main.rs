mod args;
mod report;
mod target;

use args::{Arguments, Command};
use clap::Parser;
use console::style;
use env_logger::Env;
use log::info;

use self::target::get_target;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Arguments::parse();
    let options = args.options();
    let target = get_target(options);

    info!("describing registers of '{target}' ({:?} tier)", options.tier);
    let config = regfile_arch::for_target(&target, options.tier.into())?;

    match args.command {
        Command::Show(_) => {
            println!("{}", style(&target).bold());
            print!("{}", report::show(config));
        }

        Command::Alias {
            rep,
            index,
            other_rep,
            ..
        } => {
            let text = report::alias(config, rep.into(), index, other_rep.into())?;
            println!("{text}");
        }
    }

    Ok(())
}
