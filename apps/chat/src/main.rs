mod client;
mod failure;
mod guards;
mod intent;
mod profile;
mod reply;

use std::io::Write as _;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::client::AskClient;
use crate::failure::classify_error;
use crate::guards::{
    is_code_like_request, is_off_topic, out_of_stack_reply, out_of_stack_tech, CODE_REQUEST_REPLY,
    OFF_TOPIC_REPLY,
};
use crate::reply::{build_reply, Memory};

const STARTER_MESSAGE: &str = "Hey, I'm PrasadGPT 👋\n\
    I'm a Full Stack Developer (React/Next.js, Node/Express, MongoDB/PostgreSQL).\n\
    Ask about hiring, my projects, or tech stack.";

/// Chunked printing that mimics the widget's streaming effect.
const STREAM_CHUNK_CHARS: usize = 2;
const STREAM_DELAY: Duration = Duration::from_millis(10);

/// PrasadGPT terminal chat. Talks to the ask API when it can; answers from
/// the bundled resume data when it can't.
#[derive(Debug, Parser)]
#[command(name = "chat", version)]
struct Args {
    /// Base URL of the ask API
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    /// Skip the backend entirely and answer from resume data
    #[arg(long)]
    offline: bool,

    /// Print replies at once instead of streaming them
    #[arg(long)]
    no_stream: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = AskClient::new(args.server.clone());
    let mut memory = Memory::default();

    println!("{}", style("PrasadGPT").bold());
    print_reply(STARTER_MESSAGE, args.no_stream).await;
    println!(
        "{}",
        style("(type a question; 'exit' to quit)").dim()
    );

    let stdin = std::io::stdin();
    loop {
        print!("{} ", style("you>").cyan().bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        // Local guards: these never need the backend.
        if is_off_topic(question) {
            print_reply(OFF_TOPIC_REPLY, args.no_stream).await;
            continue;
        }
        if is_code_like_request(question) {
            print_reply(CODE_REQUEST_REPLY, args.no_stream).await;
            continue;
        }
        if let Some(tech) = out_of_stack_tech(question) {
            print_reply(&out_of_stack_reply(&tech), args.no_stream).await;
            continue;
        }

        if args.offline {
            let reply = build_reply(question, &memory);
            memory = reply.next_memory;
            print_reply(&reply.content, args.no_stream).await;
            continue;
        }

        match client.ask(question).await {
            Ok(answer) => print_reply(&answer, args.no_stream).await,
            Err(err) => {
                let tag = classify_error(&err);
                let reply = build_reply(question, &memory);
                memory = reply.next_memory;

                let fallback = format!(
                    "⚠️ {tag}\n\nBackend/AI isn't available right now, so I'm replying in \
                     offline mode from my resume data:\n\n{}",
                    reply.content
                );
                print_reply(&fallback, args.no_stream).await;
            }
        }
    }

    Ok(())
}

async fn print_reply(text: &str, no_stream: bool) {
    println!("{}", style("PrasadGPT>").green().bold());
    if no_stream {
        println!("{text}\n");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    for chunk in chars.chunks(STREAM_CHUNK_CHARS) {
        print!("{}", chunk.iter().collect::<String>());
        let _ = std::io::stdout().flush();
        tokio::time::sleep(STREAM_DELAY).await;
    }
    println!("\n");
}
