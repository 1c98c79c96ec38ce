// generates man page from clap CLI definition
// outputs to man/xmms2-obmenu.1

use clap::CommandFactory;
use clap_mangen::Man;
use xmms2_obmenu::cli::Cli;

fn main() -> std::io::Result<()> {
    let cmd = Cli::command();
    let man = Man::new(cmd);

    std::fs::create_dir_all("man")?;

    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    std::fs::write("man/xmms2-obmenu.1", buffer)?;

    println!("Generated man/xmms2-obmenu.1");
    Ok(())
}
