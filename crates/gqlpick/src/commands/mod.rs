mod pick;

use crate::Cli;
use crate::CommandResult;
use pick::PickCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlpick")]
pub(crate) enum CommandEnum {
    /// Print the GraphQL document selecting the given field paths.
    Pick(Box<PickCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Pick(cmd) => cmd.run(cli).await
        }
    }
}
