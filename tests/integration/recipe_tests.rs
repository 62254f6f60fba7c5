use super::common::{create_signed_in_client, create_test_client, recipe_json};
use foodgram_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

/// Body of the create and update endpoints, which echo references instead of expanded objects
fn written_recipe_json(id: u64, name: &str, cooking_time: u32) -> String {
    json!({
        "id": id,
        "name": name,
        "image": format!("http://testserver/media/recipes/images/{id}.png"),
        "text": "Mix and fry.",
        "ingredients": [{"id": 10, "amount": 200}],
        "tags": [1, 2],
        "cooking_time": cooking_time
    })
    .to_string()
}

/// Body of the favorite and shopping cart endpoints
fn entry_json(entry_id: u64, user: u64, recipe_id: u64, name: &str, cooking_time: u32) -> String {
    json!({
        "id": entry_id,
        "user": user,
        "recipe": {"id": recipe_id, "name": name, "image": null, "cooking_time": cooking_time}
    })
    .to_string()
}

fn page_json(results: Vec<serde_json::Value>) -> String {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
    .to_string()
}

#[tokio::test]
async fn get_recipes_sends_default_query_anonymously() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes/")
        .match_query(Matcher::Exact("page=1&limit=6".to_string()))
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_json(vec![recipe_json(1, "Pancakes"), recipe_json(2, "Soup")]))
        .create_async()
        .await;

    let client = create_test_client(&server);
    let page = client.get_recipes(&RecipeQuery::new()).await.unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.results[0].name, "Pancakes");
    assert_eq!(page.results[0].author.id(), Some(1));
    assert!(!page.has_next());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_recipes_sends_filters_and_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes/")
        .match_query(Matcher::Exact(
            "page=2&limit=6&author=7&is_favorited=1".to_string(),
        ))
        .match_header("authorization", "Token abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_json(vec![]))
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let query = RecipeQuery::new()
        .with_page(2)
        .with_author(7)
        .with_is_favorited(1);
    let page = client.get_recipes(&query).await.unwrap();

    assert!(page.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_recipes_shopping_cart_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes/")
        .match_query(Matcher::Exact(
            "page=1&limit=6&is_in_shopping_cart=1".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_json(vec![recipe_json(3, "Salad")]))
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let page = client
        .get_recipes(&RecipeQuery::new().with_is_in_shopping_cart(1))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_recipe_returns_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/recipes/5/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipe_json(5, "Pie").to_string())
        .create_async()
        .await;

    let client = create_test_client(&server);
    let recipe = client.get_recipe(5).await.unwrap();

    assert_eq!(recipe.id, 5);
    assert_eq!(recipe.cooking_time, 30);
    assert_eq!(recipe.ingredients[0].amount, 200);
    assert_eq!(recipe.tags[0].slug, "breakfast");
}

#[tokio::test]
async fn get_recipe_not_found_is_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/recipes/404/")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Not found."}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.get_recipe(404).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    match err {
        AppError::Api { body, .. } => assert_eq!(body, json!({"detail": "Not found."})),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn create_recipe_posts_body_without_image() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/recipes/")
        .match_header("authorization", "Token abc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Pancakes",
            "cooking_time": 15,
            "text": "Mix and fry.",
            "ingredients": [{"id": 10, "amount": 200}],
            "tags": [1, 2]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(written_recipe_json(9, "Pancakes", 15))
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let recipe = NewRecipe {
        name: "Pancakes".to_string(),
        image: None,
        cooking_time: 15,
        text: "Mix and fry.".to_string(),
        ingredients: vec![IngredientAmount { id: 10, amount: 200 }],
        tags: vec![1, 2],
    };
    let created = client.create_recipe(&recipe).await.unwrap();

    assert_eq!(created.id, 9);
    assert_eq!(created.tags, vec![1, 2]);
    assert_eq!(created.ingredients, vec![IngredientAmount { id: 10, amount: 200 }]);
    mock.assert_async().await;
}

#[tokio::test]
async fn update_recipe_omits_unchanged_image() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/recipes/9/")
        .match_header("authorization", "Token abc")
        .match_body(Matcher::Json(json!({
            "name": "Pancakes",
            "id": 9,
            "cooking_time": 20,
            "text": "Mix and fry.",
            "ingredients": [{"id": 10, "amount": 250}],
            "tags": [1]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(written_recipe_json(9, "Pancakes", 20))
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let form = RecipeForm {
        recipe_id: 9,
        name: "Pancakes".to_string(),
        image: Some("http://testserver/media/recipes/9.png".to_string()),
        cooking_time: "20".to_string(),
        text: "Mix and fry.".to_string(),
        ingredients: vec![IngredientAmount { id: 10, amount: 250 }],
        tags: vec![1],
    };
    let updated = client.update_recipe(&form, false).await.unwrap();

    assert_eq!(updated.cooking_time, 20);
    assert_eq!(updated.tags, vec![1, 2]);

    mock.assert_async().await;
}

#[tokio::test]
async fn update_recipe_sends_new_image() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/recipes/9/")
        .match_body(Matcher::PartialJson(json!({
            "image": "data:image/png;base64,AAAA",
            "cooking_time": 45
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(written_recipe_json(9, "Pancakes", 45))
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let form = RecipeForm {
        recipe_id: 9,
        name: "Pancakes".to_string(),
        image: Some("data:image/png;base64,AAAA".to_string()),
        cooking_time: " 45 ".to_string(),
        ..RecipeForm::default()
    };
    let updated = client.update_recipe(&form, true).await.unwrap();

    assert_eq!(updated.cooking_time, 45);
    assert!(updated.image.is_some());

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_recipe_accepts_no_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/recipes/9/")
        .match_header("authorization", "Token abc")
        .with_status(204)
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    client.delete_recipe(9).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn favorites_round_trip() {
    let mut server = Server::new_async().await;
    let add = server
        .mock("POST", "/api/recipes/3/favorite/")
        .match_header("authorization", "Token abc")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(entry_json(17, 2, 3, "Salad", 5))
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/api/recipes/3/favorite/")
        .match_header("authorization", "Token abc")
        .with_status(204)
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let entry = client.add_to_favorites(3).await.unwrap();
    client.remove_from_favorites(3).await.unwrap();

    assert_eq!(entry.id, 17);
    assert_eq!(entry.user, 2);
    assert_eq!(entry.recipe.id, 3);
    assert_eq!(entry.recipe.cooking_time, 5);
    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn add_to_favorites_twice_returns_existing_entry() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/recipes/3/favorite/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(entry_json(17, 2, 3, "Salad", 5))
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let entry = client.add_to_favorites(3).await.unwrap();

    assert_eq!(entry.id, 17);
    assert_eq!(entry.recipe.name, "Salad");
}

#[tokio::test]
async fn add_to_favorites_unknown_recipe_is_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/recipes/404/favorite/")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Not found."}"#)
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let err = client.add_to_favorites(404).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn shopping_cart_round_trip() {
    let mut server = Server::new_async().await;
    let add = server
        .mock("POST", "/api/recipes/4/shopping_cart/")
        .match_header("authorization", "Token abc")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(entry_json(21, 2, 4, "Stew", 90))
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/api/recipes/4/shopping_cart/")
        .with_status(204)
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let entry = client.add_to_orders(4).await.unwrap();
    client.remove_from_orders(4).await.unwrap();

    assert_eq!(entry.id, 21);
    assert_eq!(entry.recipe.name, "Stew");

    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn copy_recipe_link_is_anonymous() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes/3/get-link/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"short-link":"http://testserver/s/3d0"}"#)
        .create_async()
        .await;

    let client = create_signed_in_client(&server, "abc");
    let link = client.copy_recipe_link(3).await.unwrap();

    assert_eq!(link.short_link, "http://testserver/s/3d0");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_ingredients_filters_by_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/ingredients/")
        .match_query(Matcher::UrlEncoded("name".into(), "fl".into()))
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":10,"name":"flour","measurement_unit":"g"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let ingredients = client.get_ingredients("fl").await.unwrap();

    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].measurement_unit, "g");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_tags_lists_catalog() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/tags/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r##"[{"id":1,"name":"Breakfast","color":"#E26C2D","slug":"breakfast"},
                {"id":2,"name":"Dinner","slug":"dinner"}]"##,
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    let tags = client.get_tags().await.unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].color.as_deref(), Some("#E26C2D"));
    assert_eq!(tags[1].color, None);
}

#[tokio::test]
async fn get_recipe_accepts_author_as_name() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/recipes/6/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 6,
                "author": "chef",
                "name": "Stew",
                "image": "http://testserver/media/recipes/images/6.png",
                "text": "Simmer.",
                "ingredients": [{"id": 10, "name": "flour", "measurement_unit": "g", "amount": 20}],
                "tags": [{"id": 1, "name": "Dinner", "color": "#8775D2", "slug": "dinner"}],
                "cooking_time": 90,
                "pub_date": "2025-10-19T12:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    let recipe = client.get_recipe(6).await.unwrap();

    assert_eq!(recipe.author, Author::Name("chef".to_string()));
    assert!(!recipe.is_favorited);
    assert_eq!(recipe.tags[0].slug, "dinner");
}
