use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    honu-saas-cli completions bash > ~/.bash_completion.d/honu-saas-cli\n\n\
                  Generate zsh completions:\n    honu-saas-cli completions zsh > ~/.zfunc/_honu-saas-cli\n\n\
                  Generate fish completions:\n    honu-saas-cli completions fish > ~/.config/fish/completions/honu-saas-cli.fish\n\n\
                  Generate PowerShell completions:\n    honu-saas-cli completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
