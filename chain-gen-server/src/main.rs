use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use log::info;
use serde::Deserialize;

use chain_gen_core::io::list_files;
use chain_gen_core::model::markov_chain::MarkovChain;
use chain_gen_core::text::WordDomain;

/// Directory the corpus files are served from
const DATA_DIR: &str = "./data";

/// Default word cap per generated tweet, start word included
const DEFAULT_MAX_LEN: usize = 20;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	max_len: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	chain: MarkovChain<WordDomain>,
	corpora: Vec<String>,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates tweet-like sequences from the loaded corpus chain, one per
/// line. Returns 500 with the engine's error text when nothing useful is
/// loaded (empty chain, or only sentence-ending words).
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	let max_len = query.max_len.unwrap_or(DEFAULT_MAX_LEN);
	if max_len < 2 {
		return HttpResponse::BadRequest().body("max_len must be at least 2");
	}

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	let mut rng = rand::rng();
	let mut lines = Vec::with_capacity(count);
	for _ in 0..count {
		let start = match shared_data.chain.get_random_start(&mut rng) {
			Ok(id) => id,
			Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
		};

		let mut line = shared_data.chain.payload(start).clone();
		shared_data.chain.generate(start, max_len, &mut rng, |word| {
			line.push(' ');
			line.push_str(word);
		});
		lines.push(line);
	}

	HttpResponse::Ok().body(lines.join("\n"))
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files(DATA_DIR, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpora.join("\n"))
}

#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	// Rebuild from scratch; each corpus feeds independently so the last
	// word of one file never links into the next
	shared_data.chain = MarkovChain::new(WordDomain);
	shared_data.corpora.clear();
	for name in names {
		let corpus_path = format!("{DATA_DIR}/{name}.txt");
		match shared_data.chain.feed_file(&corpus_path, None) {
			Ok(words) => info!("loaded {words} words from {corpus_path}"),
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
		}
		shared_data.corpora.push(name.to_owned());
	}

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Wraps an empty word chain in a `Mutex` for thread safety and starts an
/// Actix-web HTTP server; corpora are loaded over `/v1/load_corpora`.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Currently, the corpus directory is hardcoded and should be made
///   configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		chain: MarkovChain::new(WordDomain),
		corpora: Vec::new(),
	};
	let shared_chain = web::Data::new(Mutex::new(shared_data));

	info!("listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_chain.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
