mod args;
mod cmd;

fn main() -> anyhow::Result<()> {
    cmd::run()
}
