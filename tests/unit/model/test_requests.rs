use foodgram_client::model::requests::{
    IngredientAmount, NewRecipe, RecipeForm, RecipeQuery, SubscriptionsQuery, UsersQuery,
};
use serde_json::{Value, json};

fn pairs(p: Vec<(&'static str, String)>) -> Vec<(String, String)> {
    p.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn test_recipe_query_defaults() {
    let query = RecipeQuery::new();
    assert_eq!(
        pairs(query.query_pairs()),
        vec![
            ("page".to_string(), "1".to_string()),
            ("limit".to_string(), "6".to_string())
        ]
    );
}

#[test]
fn test_recipe_query_zero_flags_are_omitted() {
    let query = RecipeQuery::new()
        .with_is_favorited(0)
        .with_is_in_shopping_cart(1)
        .with_limit(12);
    let keys: Vec<&str> = query.query_pairs().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["page", "limit", "is_in_shopping_cart"]);
}

#[test]
fn test_users_and_subscriptions_queries() {
    let users = UsersQuery { page: 3, limit: 6 };
    assert_eq!(users.query_pairs()[0].1, "3");

    let subscriptions = SubscriptionsQuery::page(2);
    let pairs = subscriptions.query_pairs();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], ("page", "2".to_string()));
    assert_eq!(pairs[2], ("recipes_limit", "3".to_string()));
}

#[test]
fn test_new_recipe_omits_missing_image() {
    let recipe = NewRecipe {
        name: "Soup".to_string(),
        cooking_time: 40,
        text: "Boil.".to_string(),
        ingredients: vec![IngredientAmount { id: 1, amount: 2 }],
        ..NewRecipe::default()
    };
    let value = serde_json::to_value(&recipe).unwrap();

    assert!(value.get("image").is_none());
    assert!(value.get("tags").is_none());
    assert_eq!(value["cooking_time"], json!(40));
}

#[test]
fn test_update_body_coerces_cooking_time() {
    let form = RecipeForm {
        recipe_id: 4,
        name: "Stew".to_string(),
        image: Some("http://host/media/4.png".to_string()),
        cooking_time: "90".to_string(),
        ..RecipeForm::default()
    };

    let body = serde_json::to_value(form.to_update_body(false)).unwrap();
    assert_eq!(body["id"], json!(4));
    assert_eq!(body["cooking_time"], json!(90));
    assert!(body.get("image").is_none());

    let invalid = RecipeForm {
        cooking_time: "soon".to_string(),
        ..form
    };
    let body = serde_json::to_value(invalid.to_update_body(true)).unwrap();
    assert_eq!(body["cooking_time"], Value::Null);
    assert_eq!(body["image"], json!("http://host/media/4.png"));
}

#[test]
fn test_new_recipe_body_shape() {
    let recipe = NewRecipe {
        name: "Pancakes".to_string(),
        image: Some("data:image/png;base64,AAAA".to_string()),
        cooking_time: 15,
        text: "Mix and fry.".to_string(),
        ingredients: vec![IngredientAmount { id: 10, amount: 200 }],
        tags: vec![1],
    };

    assert_json_diff::assert_json_eq!(
        serde_json::to_value(&recipe).unwrap(),
        json!({
            "name": "Pancakes",
            "image": "data:image/png;base64,AAAA",
            "cooking_time": 15,
            "text": "Mix and fry.",
            "ingredients": [{"id": 10, "amount": 200}],
            "tags": [1]
        })
    );
}
