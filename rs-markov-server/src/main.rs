use std::path::{Path, PathBuf};
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use rs_markov_core::io::list_sources;
use rs_markov_core::{GeneratorConfig, Markov, MarkovError};

/// Extension of the source files served from the data directory.
const SOURCE_EXTENSION: &str = "txt";

/// Upper bound on `words` accepted by `/v1/generate`.
const MAX_WORDS: usize = 10_000;

/// HTTP server generating Markov text from a loaded source.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Address to bind.
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on.
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Directory holding `.txt` sources.
	#[arg(long, default_value = "./data")]
	data_dir: PathBuf,

	/// Source file loaded at startup.
	#[arg(long)]
	source: Option<PathBuf>,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	words: Option<usize>,
	seed: Option<u64>,
}

#[derive(Deserialize)]
struct SourceQuery {
	name: Option<String>,
}

struct SharedData {
	markov: Markov,
	data_dir: PathBuf,
}

/// Maps a core error to an HTTP response.
fn error_response(e: &MarkovError) -> HttpResponse {
	match e {
		MarkovError::EmptySource | MarkovError::InsufficientCorpus { .. } | MarkovError::InvalidConfig(_) => {
			HttpResponse::BadRequest().body(e.to_string())
		}
		MarkovError::SourceNotFound(_) => HttpResponse::NotFound().body(e.to_string()),
		MarkovError::Io(_) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates text from the current source. `seed` makes the output
/// reproducible; `words` defaults to 20 and may not exceed `MAX_WORDS`.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let words = query.words.unwrap_or(20);
	if words > MAX_WORDS {
		return HttpResponse::BadRequest().body(format!("words must be <= {MAX_WORDS}"));
	}

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Source lock failed"),
	};

	let result = match query.seed {
		Some(seed) => shared_data.markov.generate_with_rng(words, &mut StdRng::seed_from_u64(seed)),
		None => shared_data.markov.generate(words),
	};

	match result {
		Ok(text) => HttpResponse::Ok().body(text),
		Err(e) => error_response(&e),
	}
}

#[get("/v1/sources")]
async fn get_sources(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Source lock failed"),
	};

	match list_sources(&data_dir, SOURCE_EXTENSION) {
		Ok(files) => {
			let names: Vec<String> = files
				.iter()
				.filter_map(|file| Path::new(file).file_stem())
				.map(|stem| stem.to_string_lossy().to_string())
				.collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list sources"),
	}
}

#[get("/v1/source")]
async fn get_source(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	match data.lock() {
		Ok(m) => HttpResponse::Ok().body(m.markov.source().to_owned()),
		Err(_) => HttpResponse::InternalServerError().body("Source lock failed"),
	}
}

/// HTTP PUT endpoint `/v1/source`: the request body becomes the source.
#[put("/v1/source")]
async fn put_source(data: web::Data<Mutex<SharedData>>, body: String) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Source lock failed"),
	};
	shared_data.markov.set_source_string(body);
	HttpResponse::Ok().body("Source updated")
}

/// HTTP PUT endpoint `/v1/load_source?name=NAME`: loads `<data_dir>/NAME.txt`.
#[put("/v1/load_source")]
async fn put_load_source(data: web::Data<Mutex<SharedData>>, query: web::Query<SourceQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty source name"),
	};
	if name.contains('/') || name.contains('\\') || name.contains("..") {
		return HttpResponse::BadRequest().body("Invalid source name");
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Source lock failed"),
	};

	let path = shared_data.data_dir.join(format!("{name}.{SOURCE_EXTENSION}"));
	match shared_data.markov.set_source_file(&path) {
		Ok(()) => HttpResponse::Ok().body("Source loaded successfully"),
		Err(e) => {
			warn!("failed to load {}: {e}", path.display());
			error_response(&e)
		}
	}
}

#[get("/v1/config")]
async fn get_config(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	match data.lock() {
		Ok(m) => HttpResponse::Ok().json(m.markov.config()),
		Err(_) => HttpResponse::InternalServerError().body("Source lock failed"),
	}
}

#[put("/v1/config")]
async fn put_config(data: web::Data<Mutex<SharedData>>, config: web::Json<GeneratorConfig>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Source lock failed"),
	};

	match shared_data.markov.set_config(config.into_inner()) {
		Ok(()) => HttpResponse::Ok().json(shared_data.markov.config()),
		Err(e) => error_response(&e),
	}
}

/// Main entry point for the server.
///
/// Optionally loads a startup source, wraps the `Markov` holder in a
/// `Mutex` and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let args = Args::parse();

	let markov = match &args.source {
		Some(path) => Markov::from_file(path).map_err(std::io::Error::other)?,
		None => Markov::new(),
	};
	let shared_data = SharedData { markov, data_dir: args.data_dir.clone() };
	let shared_markov = web::Data::new(Mutex::new(shared_data));

	info!("listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_markov.clone())
			.service(get_generated)
			.service(get_sources)
			.service(get_source)
			.service(put_source)
			.service(put_load_source)
			.service(get_config)
			.service(put_config)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
