use clap::Parser;

#[derive(Parser)]
#[command(
    name = "packmate",
    version,
    about = "Smart compression and decompression via the system's archive tools",
    after_help = "Examples:\n  \
        packmate arch.tar.gz ./extracted     Decompress arch.tar.gz into extracted/\n  \
        packmate ./my_folder backup.zip      Compress my_folder (kept as a folder inside the zip)\n  \
        packmate ./my_folder/ backup.zip     Compress the folder's contents (no wrapping folder)\n  \
        packmate -i big_file.rar .           Interactive decompression into the current directory\n  \
        packmate -p=secret docs.7z ./docs    Decompress docs.7z with password 'secret'\n  \
        packmate -p secret.zip .             Decompress secret.zip, prompting for the password"
)]
pub struct CliArgs {
    /// Guided prompt-driven mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Protect or unlock the archive; bare -p prompts for the password
    #[arg(
        short = 'p',
        long = "password",
        value_name = "PASSWORD",
        num_args = 0..=1,
        require_equals = true
    )]
    pub password: Option<Option<String>>,

    /// File, directory or archive to read
    pub source: Option<String>,

    /// Archive to create, or directory to extract into
    pub target: Option<String>,
}
