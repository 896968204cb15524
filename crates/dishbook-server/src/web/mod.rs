//! Browser page for managing dishes.
//!
//! The page is a thin client over the JSON API: it fetches the list, renders
//! it as a table and sends create/update/delete calls, re-fetching the whole
//! list after every successful change.

use std::sync::LazyLock;

use tera::{Context, Tera};

static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    if let Err(e) = tera.add_raw_templates(vec![("index.html", INDEX_TEMPLATE)]) {
        tracing::error!("Failed to load templates: {e}");
    }
    tera
});

/// Render a template with context
pub fn render(template: &str, context: &Context) -> Result<String, tera::Error> {
    TEMPLATES.render(template, context)
}

// The API base travels in a data attribute: attribute values are unescaped by
// the browser, script text is not.
const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dishes</title>
    <style>
        body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 2rem; }
        table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }
        th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
        th { background: #f3f3f3; }
        form { display: grid; grid-template-columns: max-content 1fr; gap: 0.4rem 1rem; max-width: 40rem; }
        form button { grid-column: 2; justify-self: start; }
        #editDishForm[hidden] { display: none; }
        td button { margin-right: 0.3rem; }
    </style>
</head>
<body data-api-base="{{ api_base }}">
    <h1>Dishes</h1>

    <table id="dishesTable">
        <thead>
            <tr>
                <th>Name</th>
                <th>Ingredients</th>
                <th>Preparation Steps</th>
                <th>Cooking Time</th>
                <th>Origin</th>
                <th>Spice Level</th>
                <th>Actions</th>
            </tr>
        </thead>
        <tbody></tbody>
    </table>

    <h2>Add Dish</h2>
    <form id="addDishForm">
        <label for="name">Name</label>
        <input id="name" name="name" required>
        <label for="ingredients">Ingredients (comma-separated)</label>
        <input id="ingredients" name="ingredients" required>
        <label for="preparationSteps">Preparation Steps (comma-separated)</label>
        <input id="preparationSteps" name="preparationSteps" required>
        <label for="cookingTime">Cooking Time</label>
        <input id="cookingTime" name="cookingTime" required>
        <label for="origin">Origin</label>
        <input id="origin" name="origin" required>
        <label for="spiceLevel">Spice Level</label>
        <input id="spiceLevel" name="spiceLevel" required>
        <button type="submit">Add Dish</button>
    </form>

    <form id="editDishForm" hidden>
        <h2 style="grid-column: 1 / -1">Edit Dish</h2>
        <input type="hidden" name="id">
        <label for="editName">Name</label>
        <input id="editName" name="name">
        <label for="editIngredients">Ingredients (comma-separated)</label>
        <input id="editIngredients" name="ingredients">
        <label for="editPreparationSteps">Preparation Steps (comma-separated)</label>
        <input id="editPreparationSteps" name="preparationSteps">
        <label for="editCookingTime">Cooking Time</label>
        <input id="editCookingTime" name="cookingTime">
        <label for="editOrigin">Origin</label>
        <input id="editOrigin" name="origin">
        <label for="editSpiceLevel">Spice Level</label>
        <input id="editSpiceLevel" name="spiceLevel">
        <button type="submit">Save</button>
        <button type="button" id="cancelEdit">Cancel</button>
    </form>

    <script>
    document.addEventListener('DOMContentLoaded', () => {
        const API_BASE_URL = document.body.dataset.apiBase;
        const dishesTableBody = document.querySelector('#dishesTable tbody');
        const addDishForm = document.querySelector('#addDishForm');
        const editDishForm = document.querySelector('#editDishForm');

        // Empty entries are kept on purpose: "a,,b" is three ingredients.
        const splitList = (value) => (value || '').split(',').map(item => item.trim());

        function dishFromForm(form) {
            const dish = Object.fromEntries(new FormData(form));
            delete dish.id;
            dish.ingredients = splitList(dish.ingredients);
            dish.preparationSteps = splitList(dish.preparationSteps);
            return dish;
        }

        async function errorMessage(response) {
            try {
                const body = await response.json();
                return body.message || `HTTP error! status: ${response.status}`;
            } catch (_) {
                return `HTTP error! status: ${response.status}`;
            }
        }

        async function fetchDishes() {
            try {
                const response = await fetch(API_BASE_URL);
                if (!response.ok) {
                    throw new Error(await errorMessage(response));
                }
                displayDishes(await response.json());
            } catch (error) {
                console.error('Error fetching dishes:', error);
                alert('Error fetching dishes: ' + error.message);
            }
        }

        function cell(text) {
            const td = document.createElement('td');
            td.textContent = text;
            return td;
        }

        function button(label, onClick) {
            const b = document.createElement('button');
            b.textContent = label;
            b.onclick = onClick;
            return b;
        }

        function displayDishes(dishes) {
            dishesTableBody.innerHTML = '';
            dishes.forEach(dish => {
                const row = document.createElement('tr');
                row.appendChild(cell(dish.name));
                row.appendChild(cell(dish.ingredients.join(', ')));
                row.appendChild(cell(dish.preparationSteps.join(', ')));
                row.appendChild(cell(dish.cookingTime));
                row.appendChild(cell(dish.origin));
                row.appendChild(cell(dish.spiceLevel));

                const actions = document.createElement('td');
                actions.appendChild(button('Update', () => editDish(dish)));
                actions.appendChild(button('Delete', () => deleteDish(dish.id)));
                row.appendChild(actions);

                dishesTableBody.appendChild(row);
            });
        }

        addDishForm.addEventListener('submit', async (e) => {
            e.preventDefault();
            const newDish = dishFromForm(addDishForm);
            try {
                const response = await fetch(API_BASE_URL, {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(newDish)
                });
                if (response.ok) {
                    alert('Dish added successfully');
                    addDishForm.reset();
                    fetchDishes();
                } else if (response.status === 409) {
                    alert('Dish already exists');
                } else {
                    alert('Error adding dish: ' + await errorMessage(response));
                }
            } catch (error) {
                console.error('Error adding dish:', error);
                alert('Error adding dish');
            }
        });

        const editField = (name) => editDishForm.querySelector(`[name="${name}"]`);

        function editDish(dish) {
            editField('id').value = dish.id;
            editField('name').value = dish.name;
            editField('ingredients').value = dish.ingredients.join(', ');
            editField('preparationSteps').value = dish.preparationSteps.join(', ');
            editField('cookingTime').value = dish.cookingTime;
            editField('origin').value = dish.origin;
            editField('spiceLevel').value = dish.spiceLevel;
            editDishForm.hidden = false;
            editField('name').focus();
        }

        document.querySelector('#cancelEdit').addEventListener('click', () => {
            editDishForm.reset();
            editDishForm.hidden = true;
        });

        editDishForm.addEventListener('submit', async (e) => {
            e.preventDefault();
            const id = editField('id').value;
            const updated = dishFromForm(editDishForm);
            try {
                const response = await fetch(`${API_BASE_URL}/${encodeURIComponent(id)}`, {
                    method: 'PUT',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(updated)
                });
                if (response.ok) {
                    alert('Dish updated successfully');
                    editDishForm.reset();
                    editDishForm.hidden = true;
                    fetchDishes();
                } else {
                    alert('Error updating dish: ' + await errorMessage(response));
                }
            } catch (error) {
                console.error('Error updating dish:', error);
                alert('Error updating dish');
            }
        });

        async function deleteDish(id) {
            if (!confirm('Are you sure you want to delete this dish?')) {
                return;
            }
            try {
                const response = await fetch(`${API_BASE_URL}/${encodeURIComponent(id)}`, {
                    method: 'DELETE'
                });
                if (response.ok) {
                    alert('Dish deleted successfully');
                    fetchDishes();
                } else {
                    alert('Error deleting dish: ' + await errorMessage(response));
                }
            } catch (error) {
                console.error('Error deleting dish:', error);
                alert('Error deleting dish');
            }
        }

        fetchDishes();
    });
    </script>
</body>
</html>
"##;
