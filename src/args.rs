use clap::{Args, Parser, Subcommand, ValueEnum};
use regfile_arch::CompilerTier;
use regfile_common::{RegisterCode, Representation};

/// inspect the register files of compiler targets.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(propagate_version = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

impl Arguments {
    pub fn options(&self) -> &Options {
        self.command.options()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the register configuration of a target.
    #[command(visible_alias = "s")]
    Show(Options),

    /// Print the registers which share storage with a floating point register.
    #[command(visible_alias = "a")]
    Alias {
        #[command(flatten)]
        options: Options,

        /// The representation of the register to query.
        #[arg(value_enum)]
        rep: Rep,

        /// The code of the register to query.
        index: RegisterCode,

        /// The representation of the aliased registers.
        #[arg(value_enum)]
        other_rep: Rep,
    },
}

impl Command {
    pub fn options(&self) -> &Options {
        match self {
            Self::Show(opts) => opts,
            Self::Alias { options, .. } => options,
        }
    }
}

#[derive(Debug, Args)]
pub struct Options {
    /// The target to describe. Defaults to the host.
    #[arg(short, long)]
    pub target: Option<String>,

    /// The compiler tier to select registers for.
    #[arg(long, value_enum, default_value_t = Tier::Optimizing)]
    pub tier: Tier,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Tier {
    Baseline,
    Optimizing,
}

impl From<Tier> for CompilerTier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Baseline => CompilerTier::Baseline,
            Tier::Optimizing => CompilerTier::Optimizing,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Rep {
    F32,
    F64,
}

impl From<Rep> for Representation {
    fn from(rep: Rep) -> Self {
        match rep {
            Rep::F32 => Representation::Float32,
            Rep::F64 => Representation::Float64,
        }
    }
}
