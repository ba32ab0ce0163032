//! SQL word table used to colour identifiers in the editor.
//!
//! Every entry maps a lower-cased word to a [`WordClass`]: either a reserved
//! or non-reserved MySQL keyword, or the name of a column type. Words that are
//! not in the table are plain identifiers and keep the default colour.
//!
//! The table is plain static data turned into a `HashMap` on first use and
//! shared read-only by every scan afterwards.

use std::{collections::HashMap, sync::LazyLock};

/// Classification of a recognised word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WordClass {
    #[display("keyword")]
    Keyword,
    #[display("type")]
    Type,
}

static WORDS: LazyLock<HashMap<&'static str, WordClass>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Classify a word regardless of its case.
pub fn classify(word: &str) -> Option<WordClass> {
    classify_lower(&word.to_lowercase())
}

/// Classify a word that is already lower-cased.
///
/// NOTE: The caller is responsible for lower-casing. The scanner lowers
/// characters as it accumulates a word and calls this directly.
pub fn classify_lower(word: &str) -> Option<WordClass> {
    WORDS.get(word).copied()
}

/// Number of words in the table.
pub fn word_count() -> usize {
    WORDS.len()
}

use WordClass::{Keyword as K, Type as T};

const ENTRIES: &[(&str, WordClass)] = &[
    ("account", K),
    ("action", K),
    ("add", K),
    ("after", K),
    ("against", K),
    ("aggregate", K),
    ("algorithm", K),
    ("all", K),
    ("alter", K),
    ("always", K),
    ("analyse", K),
    ("analyze", K),
    ("and", K),
    ("any", K),
    ("as", K),
    ("asc", K),
    ("ascii", K),
    ("asensitive", K),
    ("at", K),
    ("autoextend_size", K),
    ("auto_increment", K),
    ("avg", K),
    ("avg_row_length", K),
    ("backup", K),
    ("before", K),
    ("begin", K),
    ("between", K),
    ("bigint", T),
    ("binary", T),
    ("binlog", K),
    ("bit", T),
    ("blob", T),
    ("block", K),
    ("bool", T),
    ("boolean", T),
    ("both", K),
    ("btree", K),
    ("by", K),
    ("byte", T),
    ("cache", K),
    ("call", K),
    ("cascade", K),
    ("cascaded", K),
    ("case", K),
    ("catalog_name", K),
    ("chain", K),
    ("change", K),
    ("changed", K),
    ("channel", K),
    ("char", T),
    ("character", K),
    ("charset", K),
    ("check", K),
    ("checksum", K),
    ("cipher", K),
    ("class_origin", K),
    ("client", K),
    ("close", K),
    ("coalesce", K),
    ("code", K),
    ("collate", K),
    ("collation", K),
    ("column", K),
    ("columns", K),
    ("column_format", K),
    ("column_name", K),
    ("comment", K),
    ("commit", K),
    ("committed", K),
    ("compact", K),
    ("completion", K),
    ("compressed", K),
    ("compression", K),
    ("concurrent", K),
    ("condition", K),
    ("connection", K),
    ("consistent", K),
    ("constraint", K),
    ("constraint_catalog", K),
    ("constraint_name", K),
    ("constraint_schema", K),
    ("contains", K),
    ("context", K),
    ("continue", K),
    ("convert", K),
    ("cpu", K),
    ("create", K),
    ("cross", K),
    ("cube", K),
    ("current", K),
    ("current_date", K),
    ("current_time", K),
    ("current_timestamp", K),
    ("current_user", K),
    ("cursor", K),
    ("cursor_name", K),
    ("data", K),
    ("database", K),
    ("databases", K),
    ("datafile", K),
    ("date", T),
    ("datetime", T),
    ("day", K),
    ("day_hour", K),
    ("day_microsecond", K),
    ("day_minute", K),
    ("day_second", K),
    ("deallocate", K),
    ("dec", K),
    ("decimal", T),
    ("declare", K),
    ("default", K),
    ("default_auth", K),
    ("definer", K),
    ("delayed", K),
    ("delay_key_write", K),
    ("delete", K),
    ("desc", K),
    ("describe", K),
    ("des_key_file", K),
    ("deterministic", K),
    ("diagnostics", K),
    ("directory", K),
    ("disable", K),
    ("discard", K),
    ("disk", K),
    ("distinct", K),
    ("distinctrow", K),
    ("div", K),
    ("do", K),
    ("double", T),
    ("drop", K),
    ("dual", K),
    ("dumpfile", K),
    ("duplicate", K),
    ("dynamic", K),
    ("each", K),
    ("else", K),
    ("elseif", K),
    ("enable", K),
    ("enclosed", K),
    ("encryption", K),
    ("end", K),
    ("ends", K),
    ("engine", K),
    ("engines", K),
    ("enum", T),
    ("error", K),
    ("errors", K),
    ("escape", K),
    ("escaped", K),
    ("event", K),
    ("events", K),
    ("every", K),
    ("exchange", K),
    ("execute", K),
    ("exists", K),
    ("exit", K),
    ("expansion", K),
    ("expire", K),
    ("explain", K),
    ("export", K),
    ("extended", K),
    ("extent_size", K),
    ("false", K),
    ("fast", K),
    ("faults", K),
    ("fetch", K),
    ("fields", K),
    ("file", K),
    ("file_block_size", K),
    ("filter", K),
    ("first", K),
    ("fixed", K),
    ("float", T),
    ("float4", T),
    ("float8", T),
    ("flush", K),
    ("follows", K),
    ("for", K),
    ("force", K),
    ("foreign", K),
    ("format", K),
    ("found", K),
    ("from", K),
    ("full", K),
    ("fulltext", K),
    ("function", K),
    ("general", K),
    ("generated", K),
    ("geometry", K),
    ("geometrycollection", K),
    ("get", K),
    ("get_format", K),
    ("global", K),
    ("grant", K),
    ("grants", K),
    ("group", K),
    ("group_replication", K),
    ("handler", K),
    ("hash", K),
    ("having", K),
    ("help", K),
    ("high_priority", K),
    ("host", K),
    ("hosts", K),
    ("hour", K),
    ("hour_microsecond", K),
    ("hour_minute", K),
    ("hour_second", K),
    ("identified", K),
    ("if", K),
    ("ignore", K),
    ("ignore_server_ids", K),
    ("import", K),
    ("in", K),
    ("index", K),
    ("indexes", K),
    ("infile", K),
    ("initial_size", K),
    ("inner", K),
    ("inout", K),
    ("insensitive", K),
    ("insert", K),
    ("insert_method", K),
    ("install", K),
    ("instance", K),
    ("int", T),
    ("int1", T),
    ("int2", T),
    ("int3", T),
    ("int4", T),
    ("int8", T),
    ("integer", T),
    ("interval", K),
    ("into", K),
    ("invoker", K),
    ("io", K),
    ("io_after_gtids", K),
    ("io_before_gtids", K),
    ("io_thread", K),
    ("ipc", K),
    ("is", K),
    ("isolation", K),
    ("issuer", K),
    ("iterate", K),
    ("join", K),
    ("json", K),
    ("key", K),
    ("keys", K),
    ("key_block_size", K),
    ("kill", K),
    ("language", K),
    ("last", K),
    ("leading", K),
    ("leave", K),
    ("leaves", K),
    ("left", K),
    ("less", K),
    ("level", K),
    ("like", K),
    ("limit", K),
    ("linear", K),
    ("lines", K),
    ("linestring", K),
    ("list", K),
    ("load", K),
    ("local", K),
    ("localtime", K),
    ("localtimestamp", K),
    ("lock", K),
    ("locks", K),
    ("logfile", K),
    ("logs", K),
    ("long", K),
    ("longblob", T),
    ("longtext", T),
    ("loop", K),
    ("low_priority", K),
    ("master", K),
    ("master_auto_position", K),
    ("master_bind", K),
    ("master_connect_retry", K),
    ("master_delay", K),
    ("master_heartbeat_period", K),
    ("master_host", K),
    ("master_log_file", K),
    ("master_log_pos", K),
    ("master_password", K),
    ("master_port", K),
    ("master_retry_count", K),
    ("master_server_id", K),
    ("master_ssl", K),
    ("master_ssl_ca", K),
    ("master_ssl_capath", K),
    ("master_ssl_cert", K),
    ("master_ssl_cipher", K),
    ("master_ssl_crl", K),
    ("master_ssl_crlpath", K),
    ("master_ssl_key", K),
    ("master_ssl_verify_server_cert", K),
    ("master_tls_version", K),
    ("master_user", K),
    ("match", K),
    ("maxvalue", K),
    ("max_connections_per_hour", K),
    ("max_queries_per_hour", K),
    ("max_rows", K),
    ("max_size", K),
    ("max_statement_time", K),
    ("max_updates_per_hour", K),
    ("max_user_connections", K),
    ("medium", T),
    ("mediumblob", T),
    ("mediumint", T),
    ("mediumtext", T),
    ("memory", K),
    ("merge", K),
    ("message_text", K),
    ("microsecond", K),
    ("middleint", K),
    ("migrate", K),
    ("minute", K),
    ("minute_microsecond", K),
    ("minute_second", K),
    ("min_rows", K),
    ("mod", K),
    ("mode", K),
    ("modifies", K),
    ("modify", K),
    ("month", K),
    ("multilinestring", K),
    ("multipoint", K),
    ("multipolygon", K),
    ("mutex", K),
    ("mysql_errno", K),
    ("name", K),
    ("names", K),
    ("national", K),
    ("natural", K),
    ("nchar", T),
    ("ndb", K),
    ("ndbcluster", K),
    ("never", K),
    ("new", K),
    ("next", K),
    ("no", K),
    ("nodegroup", K),
    ("nonblocking", K),
    ("none", K),
    ("not", K),
    ("no_wait", K),
    ("no_write_to_binlog", K),
    ("null", K),
    ("number", T),
    ("numeric", T),
    ("nvarchar", T),
    ("offset", K),
    ("old_password", K),
    ("on", K),
    ("one", K),
    ("only", K),
    ("open", K),
    ("optimize", K),
    ("optimizer_costs", K),
    ("option", K),
    ("optionally", K),
    ("options", K),
    ("or", K),
    ("order", K),
    ("out", K),
    ("outer", K),
    ("outfile", K),
    ("owner", K),
    ("pack_keys", K),
    ("page", K),
    ("parser", K),
    ("parse_gcol_expr", K),
    ("partial", K),
    ("partition", K),
    ("partitioning", K),
    ("partitions", K),
    ("password", K),
    ("phase", K),
    ("plugin", K),
    ("plugins", K),
    ("plugin_dir", K),
    ("point", K),
    ("polygon", K),
    ("port", K),
    ("precedes", K),
    ("precision", K),
    ("prepare", K),
    ("preserve", K),
    ("prev", K),
    ("primary", K),
    ("privileges", K),
    ("procedure", K),
    ("processlist", K),
    ("profile", K),
    ("profiles", K),
    ("proxy", K),
    ("purge", K),
    ("quarter", K),
    ("query", K),
    ("quick", K),
    ("range", K),
    ("read", K),
    ("reads", K),
    ("read_only", K),
    ("read_write", K),
    ("real", K),
    ("rebuild", K),
    ("recover", K),
    ("redofile", K),
    ("redo_buffer_size", K),
    ("redundant", K),
    ("references", K),
    ("regexp", K),
    ("relay", K),
    ("relaylog", K),
    ("relay_log_file", K),
    ("relay_log_pos", K),
    ("relay_thread", K),
    ("release", K),
    ("reload", K),
    ("remove", K),
    ("rename", K),
    ("reorganize", K),
    ("repair", K),
    ("repeat", K),
    ("repeatable", K),
    ("replace", K),
    ("replicate_do_db", K),
    ("replicate_do_table", K),
    ("replicate_ignore_db", K),
    ("replicate_ignore_table", K),
    ("replicate_rewrite_db", K),
    ("replicate_wild_do_table", K),
    ("replicate_wild_ignore_table", K),
    ("replication", K),
    ("require", K),
    ("reset", K),
    ("resignal", K),
    ("restore", K),
    ("restrict", K),
    ("resume", K),
    ("return", K),
    ("returned_sqlstate", K),
    ("returns", K),
    ("reverse", K),
    ("revoke", K),
    ("right", K),
    ("rlike", K),
    ("rollback", K),
    ("rollup", K),
    ("rotate", K),
    ("routine", K),
    ("row", K),
    ("rows", K),
    ("row_count", K),
    ("row_format", K),
    ("rtree", K),
    ("savepoint", K),
    ("schedule", K),
    ("schema", K),
    ("schemas", K),
    ("schema_name", K),
    ("second", K),
    ("second_microsecond", K),
    ("security", K),
    ("select", K),
    ("sensitive", K),
    ("separator", K),
    ("serial", K),
    ("serializable", K),
    ("server", K),
    ("session", K),
    ("set", K),
    ("share", K),
    ("show", K),
    ("shutdown", K),
    ("signal", K),
    ("signed", K),
    ("simple", K),
    ("slave", K),
    ("slow", K),
    ("smallint", T),
    ("snapshot", K),
    ("socket", K),
    ("some", K),
    ("soname", K),
    ("sounds", K),
    ("source", K),
    ("spatial", K),
    ("specific", K),
    ("sql", K),
    ("sqlexception", K),
    ("sqlstate", K),
    ("sqlwarning", K),
    ("sql_after_gtids", K),
    ("sql_after_mts_gaps", K),
    ("sql_before_gtids", K),
    ("sql_big_result", K),
    ("sql_buffer_result", K),
    ("sql_cache", K),
    ("sql_calc_found_rows", K),
    ("sql_no_cache", K),
    ("sql_small_result", K),
    ("sql_thread", K),
    ("sql_tsi_day", K),
    ("sql_tsi_hour", K),
    ("sql_tsi_minute", K),
    ("sql_tsi_month", K),
    ("sql_tsi_quarter", K),
    ("sql_tsi_second", K),
    ("sql_tsi_week", K),
    ("sql_tsi_year", K),
    ("ssl", K),
    ("stacked", K),
    ("start", K),
    ("starting", K),
    ("starts", K),
    ("stats_auto_recalc", K),
    ("stats_persistent", K),
    ("stats_sample_pages", K),
    ("status", K),
    ("stop", K),
    ("storage", K),
    ("stored", K),
    ("straight_join", K),
    ("string", K),
    ("subclass_origin", K),
    ("subject", K),
    ("subpartition", K),
    ("subpartitions", K),
    ("super", K),
    ("suspend", K),
    ("swaps", K),
    ("switches", K),
    ("table", K),
    ("tables", K),
    ("tablespace", K),
    ("table_checksum", K),
    ("table_name", K),
    ("temporary", K),
    ("temptable", K),
    ("terminated", K),
    ("text", K),
    ("than", K),
    ("then", K),
    ("time", K),
    ("timestamp", K),
    ("timestampadd", K),
    ("timestampdiff", K),
    ("tinyblob", T),
    ("tinyint", T),
    ("tinytext", T),
    ("to", K),
    ("trailing", K),
    ("transaction", K),
    ("trigger", K),
    ("triggers", K),
    ("true", K),
    ("truncate", K),
    ("type", K),
    ("types", K),
    ("uncommitted", K),
    ("undefined", K),
    ("undo", K),
    ("undofile", K),
    ("undo_buffer_size", K),
    ("unicode", K),
    ("uninstall", K),
    ("union", K),
    ("unique", K),
    ("unknown", K),
    ("unlock", K),
    ("unsigned", K),
    ("until", K),
    ("update", K),
    ("upgrade", K),
    ("usage", K),
    ("use", K),
    ("user", K),
    ("user_resources", K),
    ("use_frm", K),
    ("using", K),
    ("utc_date", K),
    ("utc_time", K),
    ("utc_timestamp", K),
    ("validation", K),
    ("value", K),
    ("values", K),
    ("varbinary", T),
    ("varchar", T),
    ("varcharacter", K),
    ("variables", K),
    ("varying", K),
    ("view", K),
    ("virtual", K),
    ("wait", K),
    ("warnings", K),
    ("week", K),
    ("weight_string", K),
    ("when", K),
    ("where", K),
    ("while", K),
    ("with", K),
    ("without", K),
    ("work", K),
    ("wrapper", K),
    ("write", K),
    ("x509", K),
    ("xa", K),
    ("xid", K),
    ("xml", K),
    ("xor", K),
    ("year", K),
    ("year_month", K),
    ("zerofill", K),
];
