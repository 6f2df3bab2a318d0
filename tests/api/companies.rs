use crate::helpers::{get_json_response_body, TestApp};

use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_the_static_catalog(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "description": "",
      "type": "array",
      "minItems": 5,
      "items": {
        "type": "object",
        "properties": {
          "id": {
            "type": "integer"
          },
          "name": {
            "type": "string",
            "minLength": 1
          },
          "website": {
            "type": "string",
            "minLength": 1
          },
          "description": {
            "type": "string",
            "minLength": 1
          },
          "logoUrl": {
            "type": "string",
            "minLength": 1
          },
          "foundingYear": {
            "type": "integer"
          },
          "category": {
            "type": "array",
            "minItems": 1,
            "items": {
              "type": "string"
            }
          },
          "founders": {
            "type": "array",
            "minItems": 1,
            "items": {
              "type": "object",
              "properties": {
                "name": {
                  "type": "string",
                  "minLength": 1
                },
                "role": {
                  "type": "string",
                  "minLength": 1
                },
                "batch": {
                  "type": "string",
                  "minLength": 1
                },
                "imageUrl": {
                  "type": "string",
                  "minLength": 1
                }
              },
              "required": [
                "name",
                "role",
                "batch",
                "imageUrl"
              ]
            }
          }
        },
        "required": [
          "id",
          "name",
          "website",
          "description",
          "logoUrl",
          "foundingYear",
          "category",
          "founders"
        ]
      }
    });

    let response = app.get_companies().await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get companies: {:?}",
        response
    );

    let response_body = get_json_response_body(response).await;

    assert!(
        jsonschema::is_valid(&schema, &response_body),
        "response does not match schema"
    );

    let names: Vec<&str> = response_body
        .as_array()
        .expect("response body should be an array")
        .iter()
        .map(|company| company["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Forto",
            "TechVenture",
            "FinanceFlow",
            "HealthTech Solutions",
            "EduLearn"
        ]
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_the_full_catalog_and_facets_without_filters(
    app: &mut TestApp,
) {
    let response = app.get_company_directory(&[]).await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get company directory: {:?}",
        response
    );

    let response_body = get_json_response_body(response).await;

    assert_eq!(response_body["total"], 5);
    assert_eq!(
        response_body["companies"]
            .as_array()
            .expect("companies should be an array")
            .len(),
        5
    );

    let expected_facets = json!({
        "batches": ["Spring 2016", "Fall 2015", "Fall 2014", "Spring 2013"],
        "categories": [
            "AI",
            "Accounting",
            "EdTech",
            "FinTech",
            "HealthTech",
            "Logistics",
            "Manufacturing",
            "SaaS",
            "Supply Chain",
            "Telemedicine"
        ],
        "years": ["2016", "2017", "2018", "2019", "2020"]
    });
    assert_eq!(response_body["facets"], expected_facets);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_filter_companies_by_category_membership(app: &mut TestApp) {
    let response = app.get_company_directory(&[("category", "SaaS")]).await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get company directory: {:?}",
        response
    );

    let response_body = get_json_response_body(response).await;

    assert_eq!(response_body["total"], 3);
    let names: Vec<&str> = response_body["companies"]
        .as_array()
        .expect("companies should be an array")
        .iter()
        .map(|company| company["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Forto", "TechVenture", "FinanceFlow"]);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_match_companies_through_any_founder_batch(app: &mut TestApp) {
    let response = app.get_company_directory(&[("batch", "Spring 2013")]).await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get company directory: {:?}",
        response
    );

    let response_body = get_json_response_body(response).await;

    let names: Vec<&str> = response_body["companies"]
        .as_array()
        .expect("companies should be an array")
        .iter()
        .map(|company| company["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Forto", "FinanceFlow"]);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_filter_companies_by_founding_year(app: &mut TestApp) {
    let response = app.get_company_directory(&[("year", "2016")]).await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get company directory: {:?}",
        response
    );

    let response_body = get_json_response_body(response).await;

    assert_eq!(response_body["total"], 1);
    assert_eq!(response_body["companies"][0]["name"], "Forto");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_every_company_for_the_all_sentinel(app: &mut TestApp) {
    let response = app
        .get_company_directory(&[
            ("batch", "all"),
            ("category", "all"),
            ("year", "all"),
        ])
        .await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get company directory: {:?}",
        response
    );

    let response_body = get_json_response_body(response).await;
    assert_eq!(response_body["total"], 5);
}
