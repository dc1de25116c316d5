use moon::*;
use shared::BoardConfig;

const BOARD: &str = include_str!("../../frontend/board.toml");

fn board_title() -> String {
    match BoardConfig::from_toml(BOARD) {
        Ok(config) => config.title,
        Err(error) => {
            eprintln!("board.toml rejected: {error}");
            BoardConfig::default().title
        }
    }
}

async fn frontend() -> Frontend {
    Frontend::new()
        .title(board_title())
        .index_by_robots(false)
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    println!("Serving '{}'", board_title());
    start(frontend, up_msg_handler, |_| {}).await
}
