//! Interactive tabbed menu: the terminal rendering of the launcher window.

use crate::app::AppContext;
use std::io::{BufRead, Write};
use sysdeck_core::dispatch::Spawner;
use sysdeck_core::types::{ActionEntry, Category};

const HELP: &str = "\
  <n>        launch entry n
  i <n>      show what entry n executes
  n / p      next / previous tab
  <tab>      switch to a tab by name or slug
  ?          this help
  q          quit";

pub fn run<S: Spawner>(ctx: &AppContext<S>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(ctx).drive(stdin.lock(), stdout.lock())
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Launch(usize),
    Info(usize),
    Next,
    Prev,
    Tab(String),
    Help,
    Quit,
    Blank,
}

fn parse(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => return Input::Blank,
        "q" | "quit" | "exit" => return Input::Quit,
        "n" | "next" => return Input::Next,
        "p" | "prev" => return Input::Prev,
        "?" | "h" | "help" => return Input::Help,
        _ => {}
    }
    if let Ok(n) = line.parse::<usize>() {
        return Input::Launch(n);
    }
    if let Some(rest) = line.strip_prefix("i ") {
        if let Ok(n) = rest.trim().parse::<usize>() {
            return Input::Info(n);
        }
    }
    Input::Tab(line.to_string())
}

pub struct Menu<'a, S: Spawner> {
    ctx: &'a AppContext<S>,
    tab: usize,
}

impl<'a, S: Spawner> Menu<'a, S> {
    pub fn new(ctx: &'a AppContext<S>) -> Self {
        Self { ctx, tab: 0 }
    }

    fn categories(&self) -> &'a [Category] {
        self.ctx.registry.categories()
    }

    fn current(&self) -> &'a Category {
        &self.categories()[self.tab]
    }

    pub fn drive<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> anyhow::Result<()> {
        if self.categories().is_empty() {
            writeln!(out, "No tabs configured.")?;
            return Ok(());
        }

        self.render(&mut out)?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            match parse(&line) {
                Input::Quit => break,
                Input::Blank => {}
                Input::Help => writeln!(out, "{HELP}")?,
                Input::Next => {
                    self.tab = (self.tab + 1) % self.categories().len();
                    self.render(&mut out)?;
                }
                Input::Prev => {
                    let len = self.categories().len();
                    self.tab = (self.tab + len - 1) % len;
                    self.render(&mut out)?;
                }
                Input::Tab(query) => match self.ctx.registry.category(&query) {
                    Ok(found) => {
                        self.tab = self
                            .categories()
                            .iter()
                            .position(|c| std::ptr::eq(c, found))
                            .unwrap_or(self.tab);
                        self.render(&mut out)?;
                    }
                    Err(_) => writeln!(out, "Unknown command or tab '{query}'. Type ? for help.")?,
                },
                Input::Launch(n) => match self.entry(n) {
                    Some(entry) => {
                        self.ctx.dispatcher.execute(&entry.action);
                        writeln!(out, "Launched: {}", entry.label)?;
                    }
                    None => writeln!(out, "No entry {n} in {}.", self.current().name)?,
                },
                Input::Info(n) => match self.entry(n) {
                    Some(entry) => writeln!(out, "{}", entry.tooltip())?,
                    None => writeln!(out, "No entry {n} in {}.", self.current().name)?,
                },
            }
        }
        Ok(())
    }

    fn entry(&self, n: usize) -> Option<&'a ActionEntry> {
        n.checked_sub(1).and_then(|i| self.current().entries.get(i))
    }

    fn render<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.ctx.title)?;
        let bar: Vec<String> = self
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == self.tab {
                    format!("[{}]", c.name)
                } else {
                    format!(" {} ", c.name)
                }
            })
            .collect();
        writeln!(out, "{}", bar.join(" ").trim_end())?;
        writeln!(out)?;

        let entries = &self.current().entries;
        if entries.is_empty() {
            writeln!(out, "  (no entries)")?;
        }
        for (i, entry) in entries.iter().enumerate() {
            writeln!(out, "  {:>2}. {}", i + 1, entry.label)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::RecordingSpawner;
    use std::io::Cursor;
    use sysdeck_core::config::Config;

    fn drive(input: &str) -> (String, Vec<String>) {
        let ctx = AppContext::with_spawner(&Config::default(), RecordingSpawner::default());
        let mut out = Vec::new();
        Menu::new(&ctx)
            .drive(Cursor::new(input.to_string()), &mut out)
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            ctx.dispatcher.spawner().calls(),
        )
    }

    #[test]
    fn parse_inputs() {
        assert_eq!(parse("3\n"), Input::Launch(3));
        assert_eq!(parse(" i 2 "), Input::Info(2));
        assert_eq!(parse("n"), Input::Next);
        assert_eq!(parse("prev"), Input::Prev);
        assert_eq!(parse("?"), Input::Help);
        assert_eq!(parse("q"), Input::Quit);
        assert_eq!(parse("  "), Input::Blank);
        assert_eq!(parse("Arch University"), Input::Tab("Arch University".into()));
    }

    #[test]
    fn first_render_shows_title_and_first_tab() {
        let (out, calls) = drive("q\n");
        assert!(out.contains("StormOS Utilities v6.1"));
        assert!(out.contains("[Maintenance]"));
        assert!(out.contains("   1. Refresh Mirrors"));
        assert!(calls.is_empty());
    }

    #[test]
    fn launch_by_number() {
        let (out, calls) = drive("2\nq\n");
        assert!(out.contains("Launched: System Updates"));
        assert_eq!(calls, ["xfce4-terminal -e 'sudo pacman -Syyu --noconfirm'"]);
    }

    #[test]
    fn switch_tab_then_launch_url() {
        let (out, calls) = drive("arch-university\n2\n");
        assert!(out.contains("[Arch University]"));
        assert_eq!(calls, ["xdg-open https://wiki.archlinux.org/"]);
    }

    #[test]
    fn prev_wraps_to_last_tab() {
        let (out, calls) = drive("p\n7\n");
        assert!(out.contains("[About]"));
        assert_eq!(calls, ["/usr/local/bin/data/about"]);
    }

    #[test]
    fn next_cycles_tabs() {
        let (out, _) = drive("n\nn\nq\n");
        assert!(out.contains("[Games/Utils]"));
        assert!(out.contains("[Printers]"));
    }

    #[test]
    fn info_shows_tooltip_without_spawning() {
        let (out, calls) = drive("i 4\n");
        assert!(out.contains("Execute: upkeyring"));
        assert!(calls.is_empty());
    }

    #[test]
    fn out_of_range_and_unknown_input() {
        let (out, calls) = drive("0\n99\nbogus\n");
        assert!(out.contains("No entry 0 in Maintenance."));
        assert!(out.contains("No entry 99 in Maintenance."));
        assert!(out.contains("Unknown command or tab 'bogus'"));
        assert!(calls.is_empty());
    }

    #[test]
    fn empty_registry() {
        let config = Config {
            categories: Some(vec![]),
            ..Config::default()
        };
        let ctx = AppContext::with_spawner(&config, RecordingSpawner::default());
        let mut out = Vec::new();
        Menu::new(&ctx).drive(Cursor::new(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No tabs configured.\n");
    }
}
