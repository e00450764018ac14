//! Collection and priority input tests
//!
//! Covers collection normalization as seen from rendered markup: selects,
//! radio and checkbox groups, the synthesized boolean collection, the
//! blank-entry rules, and country/time-zone priority promotion.

use plainform_inputs::collection::Extractor;
use plainform_inputs::i18n::BOOLEAN_COLLECTION_CACHE_KEY;
use plainform_inputs::metadata::{ColumnType, StaticModel};
use plainform_inputs::options::{InputOptions, PriorityFilter};
use plainform_inputs::renderer::{FormRenderer, RendererConfig};
use plainform_inputs::{MessageMap, NoTranslations, RenderError};
use plainform_html::Element;
use rstest::rstest;
use serde_json::json;

fn user() -> StaticModel {
	StaticModel::new()
		.column("age", ColumnType::Integer)
		.column("active", ColumnType::Boolean)
		.column("gender", ColumnType::String)
		.column("country", ColumnType::String)
		.column("time_zone", ColumnType::String)
		.association("company_id")
}

fn option_values(select: &Element) -> Vec<String> {
	select
		.children()
		.iter()
		.filter_map(|n| n.as_element())
		.map(|el| el.attr_text("value").unwrap_or_default().to_string())
		.collect()
}

fn selected_values(select: &Element) -> Vec<String> {
	select
		.children()
		.iter()
		.filter_map(|n| n.as_element())
		.filter(|el| el.has_flag("selected"))
		.map(|el| el.attr_text("value").unwrap_or_default().to_string())
		.collect()
}

#[rstest]
fn test_select_over_a_range_with_auto_blank() {
	let renderer = FormRenderer::new();
	let user = user().value("age", json!(19));
	let options = InputOptions::new().as_type("select").collection(18..=20);
	let field = renderer.input("user", Some(&user), "age", &options).unwrap();

	let select = field.find_by_id("user_age").unwrap();
	assert_eq!(select.attr_text("name"), Some("user[age]"));
	assert!(select.has_class("select"));
	assert_eq!(option_values(select), vec!["", "18", "19", "20"]);
	assert_eq!(selected_values(select), vec!["19"]);
}

#[rstest]
fn test_include_blank_false_suppresses_the_blank() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.collection(18..=20)
		.include_blank(false);
	let field = renderer.input("user", Some(&user), "age", &options).unwrap();
	let select = field.find_by_id("user_age").unwrap();
	assert_eq!(option_values(select), vec!["18", "19", "20"]);
}

#[rstest]
fn test_prompt_replaces_the_auto_blank() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.collection(18..=19)
		.prompt("Select your age");
	let field = renderer.input("user", Some(&user), "age", &options).unwrap();
	let select = field.find_by_id("user_age").unwrap();
	assert_eq!(option_values(select), vec!["", "18", "19"]);
	let first = select.children()[0].as_element().unwrap();
	assert_eq!(first.text_content(), "Select your age");
}

#[rstest]
fn test_multiple_select_suppresses_blank_and_suffixes_the_name() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.collection(18..=19)
		.input_html("multiple", json!(true));
	let field = renderer.input("user", Some(&user), "age", &options).unwrap();
	let select = field.find_by_id("user_age").unwrap();
	assert_eq!(select.attr_text("name"), Some("user[age][]"));
	assert!(select.has_flag("multiple"));
	assert_eq!(option_values(select), vec!["18", "19"]);
}

#[rstest]
fn test_pair_collection_splits_label_and_value() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.collection(vec![("Male", "male"), ("Female", "female")])
		.include_blank(false);
	let field = renderer
		.input("user", Some(&user), "gender", &options)
		.unwrap();
	let select = field.find_by_id("user_gender").unwrap();
	assert_eq!(option_values(select), vec!["male", "female"]);
	let first = select.children()[0].as_element().unwrap();
	assert_eq!(first.text_content(), "Male");
}

#[rstest]
fn test_malformed_collection_aborts_the_render() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.collection(vec![json!(["Male", "male", "extra"])]);
	let err = renderer
		.input("user", Some(&user), "gender", &options)
		.unwrap_err();
	assert!(matches!(err, RenderError::MalformedCollection(_)));
}

#[rstest]
fn test_association_renders_a_select_over_domain_objects() {
	let renderer = FormRenderer::new();
	let user = user().value("company_id", json!(2));
	let options = InputOptions::new().collection(vec![
		json!({"id": 1, "name": "PlataformaTec"}),
		json!({"id": 2, "name": "Nomad"}),
	]);
	let field = renderer
		.input("user", Some(&user), "company_id", &options)
		.unwrap();

	let select = field.find_by_id("user_company_id").unwrap();
	assert_eq!(selected_values(select), vec!["2"]);
	let label = field.find_by_tag("label")[0];
	assert_eq!(label.text_content(), "Company");
}

#[rstest]
fn test_accessor_and_function_extraction() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.include_blank(false)
		.collection(vec![json!({"code": "BR", "display": "Brazil"})])
		.label_method(Extractor::accessor("display"))
		.value_method(Extractor::func(|v| {
			json!(v.get("code").cloned().unwrap_or_default())
		}));
	let field = renderer
		.input("user", Some(&user), "country", &options)
		.unwrap();
	let select = field.find_by_id("user_country").unwrap();
	assert_eq!(option_values(select), vec!["BR"]);
	let first = select.children()[0].as_element().unwrap();
	assert_eq!(first.text_content(), "Brazil");
}

#[rstest]
fn test_default_option_seeds_selection_without_a_value() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("select")
		.collection(18..=20)
		.default_value(json!(20));
	let field = renderer.input("user", Some(&user), "age", &options).unwrap();
	let select = field.find_by_id("user_age").unwrap();
	assert_eq!(selected_values(select), vec!["20"]);
}

#[rstest]
fn test_stored_value_beats_the_default_option() {
	let renderer = FormRenderer::new();
	let user = user().value("age", json!(18));
	let options = InputOptions::new()
		.as_type("select")
		.collection(18..=20)
		.default_value(json!(20));
	let field = renderer.input("user", Some(&user), "age", &options).unwrap();
	let select = field.find_by_id("user_age").unwrap();
	assert_eq!(selected_values(select), vec!["18"]);
}

#[rstest]
fn test_boolean_select_uses_the_synthesized_collection() {
	let renderer = FormRenderer::new();
	let user = user().value("active", json!(true));
	let options = InputOptions::new().as_type("select").include_blank(false);
	let field = renderer
		.input("user", Some(&user), "active", &options)
		.unwrap();
	let select = field.find_by_id("user_active").unwrap();
	assert_eq!(option_values(select), vec!["true", "false"]);
	let labels: Vec<_> = select
		.children()
		.iter()
		.filter_map(|n| n.as_element())
		.map(|el| el.text_content())
		.collect();
	assert_eq!(labels, vec!["Yes", "No"]);
	assert_eq!(selected_values(select), vec!["true"]);
}

#[rstest]
fn test_boolean_collection_is_cached_until_reset() {
	let mut messages = MessageMap::new();
	messages.add("en", "yes", "Sim");
	messages.add("en", "no", "Não");
	let renderer = FormRenderer::new().with_translations(messages);
	let user = user();
	let options = InputOptions::new().as_type("radio");

	let field = renderer
		.input("user", Some(&user), "active", &options)
		.unwrap();
	assert_eq!(field.find_by_tag("label")[1].text_content(), "Sim");

	// Swapping the backend keeps the cache, so the old translation stays
	// live until the cache key is explicitly reset
	let renderer = renderer.with_translations(NoTranslations);
	let field = renderer
		.input("user", Some(&user), "active", &options)
		.unwrap();
	assert_eq!(field.find_by_tag("label")[1].text_content(), "Sim");

	renderer.reset_i18n_cache(BOOLEAN_COLLECTION_CACHE_KEY);
	let field = renderer
		.input("user", Some(&user), "active", &options)
		.unwrap();
	assert_eq!(field.find_by_tag("label")[1].text_content(), "Yes");
}

#[rstest]
fn test_boolean_radio_pair_with_value_suffixed_ids() {
	let renderer = FormRenderer::new();
	let user = user().value("active", json!(true));
	let options = InputOptions::new().as_type("radio");
	let field = renderer
		.input("user", Some(&user), "active", &options)
		.unwrap();

	let yes = field.find_by_id("user_active_true").unwrap();
	assert_eq!(yes.attr_text("type"), Some("radio"));
	assert_eq!(yes.attr_text("name"), Some("user[active]"));
	assert!(yes.has_flag("checked"));

	let no = field.find_by_id("user_active_false").unwrap();
	assert!(!no.has_flag("checked"));

	let pair_labels: Vec<_> = field
		.find_all(|el| el.has_class("collection_radio"))
		.iter()
		.map(|el| el.text_content())
		.collect();
	assert_eq!(pair_labels, vec!["Yes", "No"]);
}

#[rstest]
fn test_checkbox_group_suffixes_the_name() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new()
		.as_type("checkbox")
		.collection(vec!["admin", "editor"]);
	let field = renderer
		.input("user", Some(&user), "gender", &options)
		.unwrap();

	let admin = field.find_by_id("user_gender_admin").unwrap();
	assert_eq!(admin.attr_text("type"), Some("checkbox"));
	assert_eq!(admin.attr_text("name"), Some("user[gender][]"));
	assert!(
		field
			.find_all(|el| el.has_class("collection_checkbox"))
			.len()
			== 2
	);
}

#[rstest]
fn test_checkbox_without_a_collection_stays_boolean() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new().as_type("checkbox");
	let field = renderer
		.input("user", Some(&user), "active", &options)
		.unwrap();
	let input = field.find_by_id("user_active").unwrap();
	assert_eq!(input.attr_text("type"), Some("checkbox"));
	assert_eq!(input.attr_text("value"), Some("1"));
}

#[rstest]
fn test_country_select_without_priority_has_no_separator() {
	let renderer = FormRenderer::new();
	let user = user();
	let field = renderer
		.input("user", Some(&user), "country", &InputOptions::new())
		.unwrap();
	let select = field.find_by_id("user_country").unwrap();
	assert!(select.has_class("country"));
	assert!(option_values(select).contains(&"Brazil".to_string()));
	assert!(
		!select
			.children()
			.iter()
			.filter_map(|n| n.as_element())
			.any(|el| el.has_flag("disabled"))
	);
}

#[rstest]
fn test_country_priority_promotes_and_separates() {
	let renderer = FormRenderer::new();
	let user = user().value("country", json!("Brazil"));
	let options = InputOptions::new().priority(PriorityFilter::names(["Brazil", "France"]));
	let field = renderer
		.input("user", Some(&user), "country", &options)
		.unwrap();
	let select = field.find_by_id("user_country").unwrap();
	let options_els: Vec<_> = select
		.children()
		.iter()
		.filter_map(|n| n.as_element())
		.collect();

	assert_eq!(options_els[0].attr_text("value"), Some("Brazil"));
	assert_eq!(options_els[1].attr_text("value"), Some("France"));
	let separator = options_els[2];
	assert_eq!(separator.text_content(), "-------------");
	assert_eq!(separator.attr_text("value"), Some(""));
	assert!(separator.has_flag("disabled"));

	// The full list follows the separator unchanged
	let after: Vec<_> = options_els[3..]
		.iter()
		.map(|el| el.attr_text("value").unwrap())
		.collect();
	assert!(after.contains(&"Brazil"));
	assert!(after.contains(&"Zimbabwe"));
}

#[rstest]
fn test_priority_select_never_gets_an_auto_blank() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new().priority(PriorityFilter::names(["Brazil"]));
	let field = renderer
		.input("user", Some(&user), "country", &options)
		.unwrap();
	let select = field.find_by_id("user_country").unwrap();
	let first = select.children()[0].as_element().unwrap();
	assert_eq!(first.attr_text("value"), Some("Brazil"));
}

#[rstest]
fn test_unmatched_priority_falls_back_to_the_plain_list() {
	let renderer = FormRenderer::new();
	let user = user();
	let options = InputOptions::new().priority(PriorityFilter::names(["Atlantis"]));
	let field = renderer
		.input("user", Some(&user), "country", &options)
		.unwrap();
	let select = field.find_by_id("user_country").unwrap();
	assert!(
		!select
			.children()
			.iter()
			.filter_map(|n| n.as_element())
			.any(|el| el.has_flag("disabled"))
	);
}

#[rstest]
fn test_time_zone_priority_from_the_config() {
	let config = RendererConfig {
		time_zone_priority: vec!["Brasilia".to_string()],
		..RendererConfig::default()
	};
	let renderer = FormRenderer::new().with_config(config);
	let user = user();
	let field = renderer
		.input("user", Some(&user), "time_zone", &InputOptions::new())
		.unwrap();
	let select = field.find_by_id("user_time_zone").unwrap();
	assert!(select.has_class("time_zone"));

	let options_els: Vec<_> = select
		.children()
		.iter()
		.filter_map(|n| n.as_element())
		.collect();
	assert_eq!(options_els[0].attr_text("value"), Some("Brasilia"));
	assert_eq!(options_els[0].text_content(), "(GMT-03:00) Brasilia");
	assert!(options_els[1].has_flag("disabled"));
}

#[rstest]
fn test_time_zone_priority_by_pattern() {
	let renderer = FormRenderer::new();
	let user = user();
	let options =
		InputOptions::new().priority(PriorityFilter::pattern(r"US & Canada").unwrap());
	let field = renderer
		.input("user", Some(&user), "time_zone", &options)
		.unwrap();
	let select = field.find_by_id("user_time_zone").unwrap();
	let options_els: Vec<_> = select
		.children()
		.iter()
		.filter_map(|n| n.as_element())
		.collect();
	let promoted: Vec<_> = options_els
		.iter()
		.take_while(|el| !el.has_flag("disabled"))
		.map(|el| el.attr_text("value").unwrap())
		.collect();
	assert!(promoted.contains(&"Pacific Time (US & Canada)"));
	assert!(promoted.contains(&"Eastern Time (US & Canada)"));
	assert!(!promoted.contains(&"Brasilia"));
}

#[rstest]
fn test_time_zone_selection_marks_both_occurrences() {
	let renderer = FormRenderer::new();
	let user = user().value("time_zone", json!("Brasilia"));
	let options = InputOptions::new().priority(PriorityFilter::names(["Brasilia"]));
	let field = renderer
		.input("user", Some(&user), "time_zone", &options)
		.unwrap();
	let select = field.find_by_id("user_time_zone").unwrap();
	assert_eq!(selected_values(select), vec!["Brasilia", "Brasilia"]);
}
