//! Interactive `browse` shell.
//!
//! Reads one command per line from stdin and drives a [`PartsSession`],
//! printing the current view after every command.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use autoparts_core::{PartsSession, SearchCriteria};

use crate::render;

const HELP: &str = "\
Comandos:
  search <marca> | <modelo> | <parte>   buscar partes
  vendor <n>                            abrir la empresa n
  item <n>                              abrir la parte n
  back                                  volver a la lista de empresas
  close                                 cerrar el detalle de la parte
  image | noimage                       ampliar / cerrar la foto
  catalog [marca]                       ver marcas o modelos
  show                                  mostrar la vista actual
  help                                  esta ayuda
  quit                                  salir
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(SearchCriteria),
    Vendor(usize),
    Item(usize),
    Back,
    Close,
    Image,
    NoImage,
    Catalog(Option<String>),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Positions are 1-based on input, 0-based in the result.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word.to_lowercase().as_str() {
        "search" | "buscar" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            let [brand, model, part] = fields.as_slice() else {
                return Err("uso: search <marca> | <modelo> | <parte>".to_string());
            };
            Ok(ShellCommand::Search(SearchCriteria::new(*brand, *model, *part)))
        }
        "vendor" | "v" => position(rest).map(ShellCommand::Vendor),
        "item" | "i" => position(rest).map(ShellCommand::Item),
        "back" | "b" => Ok(ShellCommand::Back),
        "close" | "c" => Ok(ShellCommand::Close),
        "image" => Ok(ShellCommand::Image),
        "noimage" => Ok(ShellCommand::NoImage),
        "catalog" => Ok(ShellCommand::Catalog(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "show" | "" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("comando desconocido: {other} (escriba 'help')")),
    }
}

fn position(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("posición inválida: '{arg}'")),
    }
}

/// Runs the shell until `quit` or end of input.
pub async fn run(session: &PartsSession) -> Result<()> {
    if let Err(e) = session.load_catalog().await {
        tracing::warn!("Catalog unavailable: {e}");
    }
    print!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        execute(session, command).await;
    }
    Ok(())
}

/// Applies one command and prints the resulting view.
async fn execute(session: &PartsSession, command: ShellCommand) {
    // 提示已在视图中显示过，新命令前清掉
    if command != ShellCommand::Show {
        session.clear_error().await;
    }

    let result = match command {
        ShellCommand::Search(criteria) => session.search(&criteria).await.map(|_| ()),
        ShellCommand::Vendor(index) => {
            let snapshot = session.snapshot().await;
            match snapshot.groups.get(index) {
                Some(group) => session.select_vendor(&group.vendor_name).await,
                None => {
                    println!("No existe la empresa {}", index + 1);
                    return;
                }
            }
        }
        ShellCommand::Item(index) => session.select_item_at(index).await.map(|_| ()),
        ShellCommand::Back => session.back().await,
        ShellCommand::Close => session.close().await,
        ShellCommand::Image => session.open_image().await,
        ShellCommand::NoImage => session.close_image().await,
        ShellCommand::Catalog(brand) => {
            let catalog = session.catalog().await;
            print!("{}", render::catalog(&catalog, brand.as_deref()));
            return;
        }
        ShellCommand::Help => {
            print!("{HELP}");
            return;
        }
        ShellCommand::Show | ShellCommand::Quit => Ok(()),
    };

    // 有通知类型的错误会出现在视图里，其余的直接打印
    if let Err(e) = &result
        && e.kind().is_none()
    {
        println!("{e}");
    }
    print!("{}", render::view(&session.snapshot().await));
}
