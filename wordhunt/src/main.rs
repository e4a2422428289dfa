use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use wordseek::{
    board::Coordinate,
    select::MatchPolicy,
    session::{SelectOutcome, Session, WordList, MAX_WORDS, SAMPLE_WORDS},
};

/// Minimum words to start a puzzle from the interactive entry loop.
const MIN_WORDS: usize = 3;

fn main() -> io::Result<()> {
    let matches = App::new("Wordhunt")
        .version("1.0")
        .about("Terminal word search: hide a list of words in a letter grid, then hunt them down.")
        .arg(
            Arg::with_name("words")
                .short("w")
                .long("words")
                .value_name("WORDS")
                .help("comma-separated word list to play with")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("sample")
                .short("s")
                .long("sample")
                .help("play with the built-in sample word list")
                .conflicts_with("words"),
        )
        .arg(
            Arg::with_name("forward_only")
                .short("f")
                .long("forward-only")
                .help("only accept selections that read the way the word was placed"),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let policy = if matches.is_present("forward_only") {
        MatchPolicy::ForwardOnly
    } else {
        MatchPolicy::EitherDirection
    };
    let words = choose_words(&matches, &mut input)?;

    let mut session = Session::start(words, policy, &mut rng);
    play(&mut session, &mut input, &mut rng)
}

/// Choose the target words from args or the interactive entry loop.
fn choose_words<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<WordList> {
    if matches.is_present("sample") {
        return Ok(WordList::sample());
    }
    if let Some(list) = matches.value_of("words") {
        let words = list
            .split(',')
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());
        match WordList::new(words) {
            Ok(words) => return Ok(words),
            Err(err) => {
                println!("Invalid --words list: {}", err);
                println!("Enter words interactively instead.");
            }
        }
    }
    collect_words(input)
}

/// Collect a word list from the player, one word per line.
fn collect_words<B: BufRead>(input: &mut InputReader<B>) -> io::Result<WordList> {
    enum Command {
        Add(String),
        Remove(String),
        Sample,
        List,
        Clear,
        Done,
        Help,
    }
    /// Matcher for the remove command.
    static REMOVE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?:remove|rm)\s+(?P<word>\S+)$").unwrap());

    let mut words: Vec<String> = Vec::new();
    println!("Enter the words to hide, one per line. Type help or ? for commands.");
    loop {
        let cmd = input.read_input("> ", |line| match line {
            "?" | "help" => Some(Command::Help),
            "done" | "start" => Some(Command::Done),
            "sample" => Some(Command::Sample),
            "list" => Some(Command::List),
            "clear" => Some(Command::Clear),
            "" => None,
            other => {
                if let Some(captures) = REMOVE.captures(other) {
                    Some(Command::Remove(
                        captures.name("word").unwrap().as_str().to_string(),
                    ))
                } else if other.contains(char::is_whitespace) {
                    println!("Words cannot contain spaces.");
                    None
                } else {
                    Some(Command::Add(other.to_string()))
                }
            }
        })?;

        match cmd {
            Command::Add(word) => {
                let mut candidate = words.clone();
                candidate.push(word.clone());
                match WordList::new(candidate) {
                    Ok(_) => {
                        words.push(word);
                        println!("{}/{} words.", words.len(), MAX_WORDS);
                    }
                    Err(err) => println!("Rejected: {}", err),
                }
            }
            Command::Remove(word) => {
                let before = words.len();
                words.retain(|w| *w != word);
                if words.len() == before {
                    println!("No such word: {}", word);
                }
            }
            Command::Sample => {
                words = SAMPLE_WORDS.iter().map(|w| w.to_string()).collect();
                println!("Loaded the {}-word sample list.", words.len());
            }
            Command::List => {
                if words.is_empty() {
                    println!("No words yet.");
                } else {
                    println!("{}", words.join(", "));
                }
            }
            Command::Clear => words.clear(),
            Command::Done if words.len() >= MIN_WORDS => {
                // Every entry was validated as it was added.
                return Ok(WordList::new(words).unwrap());
            }
            Command::Done => println!("Enter at least {} words first.", MIN_WORDS),
            Command::Help => {
                println!(
                    "Available Commands:
    <word>          add a word (2-10 characters, no duplicates, up to {max})
    remove <word>   drop a word from the list
    list            show the words entered so far
    clear           drop all words
    sample          load the built-in sample list
    done            start the puzzle (needs at least {min} words)",
                    max = MAX_WORDS,
                    min = MIN_WORDS,
                );
            }
        }
    }
}

/// Run the hunt loop until the player quits.
fn play<B: BufRead>(
    session: &mut Session,
    input: &mut InputReader<B>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    enum Command {
        Find(Coordinate, Coordinate),
        Words,
        Board,
        New,
        Bonus,
        Help,
        Quit,
    }

    announce_round(session);
    loop {
        let size = session.board().size();
        let cmd = input.read_input_lower("> ", |line| {
            /// Matcher for selection commands with coordinates.
            static FIND: Lazy<Regex> = Lazy::new(|| {
                Regex::new(
                    r"^(?x)(?:find|f|select|sel)\s+
            (?P<r1>[0-9]+)\s*,\s*(?P<c1>[0-9]+)\s+
            (?:(?:to|->|=>)\s+)?
            (?P<r2>[0-9]+)\s*,\s*(?P<c2>[0-9]+)$",
                )
                .unwrap()
            });
            match line {
                "?" | "help" | "h" => Some(Command::Help),
                "words" | "w" => Some(Command::Words),
                "board" | "b" => Some(Command::Board),
                "new" => Some(Command::New),
                "bonus" => Some(Command::Bonus),
                "quit" | "q" | "exit" => Some(Command::Quit),
                other => {
                    if let Some(captures) = FIND.captures(other) {
                        let cell = |r: &str, c: &str| {
                            let row: usize = captures.name(r).unwrap().as_str().parse().ok()?;
                            let col: usize = captures.name(c).unwrap().as_str().parse().ok()?;
                            if row >= size || col >= size {
                                println!(
                                    "({},{}) is off the board; coordinates run 0..{}",
                                    row, col, size
                                );
                                return None;
                            }
                            Some(Coordinate::new(row, col))
                        };
                        Some(Command::Find(cell("r1", "c1")?, cell("r2", "c2")?))
                    } else {
                        println!("Unknown command {:?}. Use '?' for help", other);
                        None
                    }
                }
            }
        })?;

        match cmd {
            Command::Find(start, end) => match session.select(start, end) {
                SelectOutcome::Found { word, .. } => {
                    println!(
                        "Found {}! ({}/{})",
                        word,
                        session.found_count(),
                        session.total()
                    );
                    if session.is_complete() {
                        println!("축하합니다! 모두 찾았어요!");
                        println!(
                            "All {} words found. Type bonus for a bonus round or new to replay.",
                            session.total()
                        );
                    }
                }
                SelectOutcome::AlreadyFound(word) => println!("Already found {}.", word),
                SelectOutcome::NoMatch => println!("Nothing there."),
                SelectOutcome::NotALine => {
                    println!("Selections must run along a row, column, or diagonal.")
                }
                SelectOutcome::TooShort => println!("Select at least two cells."),
            },
            Command::Words => show_words(session),
            Command::Board => show_board(session),
            Command::New => {
                session.new_round(rng);
                announce_round(session);
            }
            Command::Bonus => {
                session.new_round_with_words(WordList::bonus(), rng);
                announce_round(session);
            }
            Command::Help => {
                println!(
                    "Available Commands:
    find <r>,<c> <r>,<c>    select the straight run of cells between the two
        coordinates and check it against the remaining words.
    words                   show the word list and which are found.
    board                   reprint the letter grid.
    new                     generate a fresh board for the same words.
    bonus                   switch to the bonus word list on a fresh board.
    quit                    leave the game.",
                );
            }
            Command::Quit => return Ok(()),
        }
    }
}

/// Print the board, the word list, and any words that did not fit.
fn announce_round(session: &Session) {
    println!();
    show_board(session);
    println!();
    show_words(session);
    let unplaced = session.board().unplaced_words();
    if !unplaced.is_empty() {
        println!();
        println!(
            "Warning: {} word(s) did not fit on this board: {}",
            unplaced.len(),
            unplaced.join(", ")
        );
        println!("Type new to reshuffle the board.");
    }
    println!();
    println!("Select a run of letters with find <row>,<col> <row>,<col>. Type help or ? for commands.");
}

/// Print the letter grid with row and column indices.
fn show_board(session: &Session) {
    let size = session.board().size();
    print!("   ");
    for col in 0..size {
        print!("{:^3}", col);
    }
    println!();
    for (row, cells) in session.board().rows().enumerate() {
        print!("{:>2} ", row);
        for ch in cells {
            print!("{:^3}", ch);
        }
        println!();
    }
}

/// Print the word list with found markers and progress.
fn show_words(session: &Session) {
    println!("Found {}/{}:", session.found_count(), session.total());
    for word in session.words().iter() {
        if session.is_found(word) {
            println!("  [x] {}", word);
        } else {
            println!("  [ ] {}", word);
        }
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Leaves the line as typed, so words keep their case.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
