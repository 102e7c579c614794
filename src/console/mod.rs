mod options;

use std::process::exit;

use itertools::Itertools;
pub use options::ConsoleOptions;

use crate::prelude::*;

/// A line-oriented console around the jump-reachability engine: feed it a
/// position and moves, ask it for jump components.
pub struct Console {
    graph: Option<JumpGraph>,
    past_graphs: Vec<JumpGraph>,
    config: ConsoleOptions,
}

impl Console {
    /// Produces a new console with the given configuration.
    pub fn new(options: ConsoleOptions) -> Console {
        Console {
            graph: None,
            past_graphs: vec![],
            config: options,
        }
    }

    /// Reads commands from stdin until it runs dry.
    pub fn run(&mut self) -> Result<()> {
        if let Some(position) = self.config.position.clone() {
            self.apply("newgame", &[position.as_str()])?;
        }

        loop {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0 {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, &args[1..])?;
        }
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "flip" => self.flip(),
            | "info" => self.info(),
            | "jumps" => self.jumps(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "quit" => exit(0),
            | "scan" => self.scan(),
            | "show" => self.show(),
            | "undo" => self.undo_move(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    /// Starts a new game, from the standard starting occupancy or from a
    /// gamestring (position fragment plus a move history).
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let gamestr = if !args.is_empty() {
            Some(args.join(" ").parse::<GameString>()?)
        } else {
            None
        };

        match gamestr {
            Some(game) => {
                let GameString { setup, moves } = game;
                self.graph = Some(JumpGraph::new(setup.own, setup.enemy));
                self.past_graphs = vec![];
                for mv in moves {
                    self.past_graphs.push(self.get().clone());
                    self.get_mut().play(mv.from, mv.to)?;
                }
            },
            None => {
                self.graph = Some(JumpGraph::new(START_OWN, START_ENEMY));
                self.past_graphs = vec![];
            }
        };

        self.print_position();
        Ok(())
    }

    fn play_move(&mut self, args: &[&str]) -> Result<()> {
        self.ensure_started()?;

        if args.is_empty() {
            return Err(anyhow!("no move provided"));
        }

        let mv = args[0].parse::<MoveString>()?;
        self.past_graphs.push(self.get().clone());
        if let Err(err) = self.get_mut().play(mv.from, mv.to) {
            self.past_graphs.pop();
            return Err(err);
        }

        self.print_position();
        Ok(())
    }

    /// Swaps the graph's perspective; the opponent becomes the mover.
    fn flip(&mut self) -> Result<()> {
        self.ensure_started()?;

        self.past_graphs.push(self.get().clone());
        self.get_mut().flip();

        self.print_position();
        Ok(())
    }

    /// Prints the jump components of the current position.
    fn jumps(&mut self) -> Result<()> {
        self.ensure_started()?;

        let components = self.get().components();
        self.print_components(&components);
        Ok(())
    }

    /// Prints the jump components recomputed from scratch off the masks.
    fn scan(&mut self) -> Result<()> {
        self.ensure_started()?;

        let graph = self.get();
        let components = scan_components(graph.own(), graph.enemy());
        self.print_components(&components);
        Ok(())
    }

    /// Pretty-prints the board, rank 8 at the top.
    fn show(&mut self) -> Result<()> {
        self.ensure_started()?;

        let graph = self.get();
        let grid = (0..BOARD_SIZE).rev().map(|row| {
            (0..BOARD_SIZE).map(|col| {
                let square = Square::new(row, col);
                match (graph.own().contains(square), graph.enemy().contains(square)) {
                    (true, _) => 'P',
                    (_, true) => 'p',
                    _ => '.',
                }
            }).collect::<String>()
        }).join("\n");

        println!("{}", grid);
        Ok(())
    }

    fn undo_move(&mut self) -> Result<()> {
        self.ensure_started()?;

        let Some(previous) = self.past_graphs.pop() else {
            return Err(anyhow!("no move to undo"));
        };
        self.graph = Some(previous);

        self.print_position();
        Ok(())
    }

    // accessors

    fn ensure_started(&mut self) -> Result<&mut JumpGraph> {
        if self.graph.is_none() {
            Err(anyhow!("no game in progress"))
        } else {
            Ok(self.get_mut())
        }
    }

    /// Retrieves the graph in a shared context.
    fn get(&self) -> &JumpGraph {
        self.graph.as_ref().unwrap()
    }

    /// Retrieves the graph in a mutable context.
    fn get_mut(&mut self) -> &mut JumpGraph {
        self.graph.as_mut().unwrap()
    }

    // basic printers

    fn print_position(&self) {
        let graph = self.get();
        println!("{}", notate_position(graph.own(), graph.enemy()));
    }

    /// Prints one `{ sources } -> { destinations }` line per component.
    fn print_components(&self, components: &[Component]) {
        for component in components {
            println!(
                "{{ {} }} -> {{ {} }}",
                component.sources.iter().map(|s| s.notate()).join(" "),
                component.destinations.iter().map(|d| d.notate()).join(" ")
            );
        }
    }

    /// Prints the console's ID.
    fn info(&self) -> Result<()>
    {
        println!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        Ok(())
    }

    /// Prints an error to the command stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the ok footer to the command stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }
}
