use std::cell::RefCell;
use std::rc::Rc;

use speculate2::speculate;
use taskdeck::models::{CreateTaskInput, TaskPriority, TaskStatus};
use taskdeck::seed;
use taskdeck::store::TaskStore;

fn seeded_store() -> TaskStore {
    TaskStore::new(seed::default_tasks())
}

speculate! {
    before {
        let mut store = seeded_store();
    }

    describe "delete" {
        it "removes exactly one task when the id is present" {
            assert!(store.delete("2"));
            assert_eq!(store.len(), 4);
            assert!(store.get("2").is_none());
        }

        it "preserves the order of the remaining tasks" {
            store.delete("3");

            let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "4", "5"]);
        }

        it "is a silent no-op for a nonexistent id" {
            let before = store.tasks().to_vec();
            assert!(!store.delete("99"));
            assert_eq!(store.tasks(), before.as_slice());
        }

        it "is idempotent" {
            store.delete("4");
            let after_first = store.tasks().to_vec();
            store.delete("4");
            assert_eq!(store.tasks(), after_first.as_slice());
        }
    }

    describe "change_status" {
        it "replaces only the status of the matched task" {
            let before = store.get("3").unwrap().clone();
            assert!(store.change_status("3", TaskStatus::Completed));

            let after = store.get("3").unwrap();
            assert_eq!(after.status, TaskStatus::Completed);
            assert_eq!(after.id, before.id);
            assert_eq!(after.title, before.title);
            assert_eq!(after.description, before.description);
            assert_eq!(after.priority, before.priority);
            assert_eq!(after.due_date, before.due_date);
        }

        it "leaves every other task untouched" {
            let others_before: Vec<_> = store
                .tasks()
                .iter()
                .filter(|t| t.id != "3")
                .cloned()
                .collect();

            store.change_status("3", TaskStatus::Completed);

            let others_after: Vec<_> = store
                .tasks()
                .iter()
                .filter(|t| t.id != "3")
                .cloned()
                .collect();
            assert_eq!(others_before, others_after);
        }

        it "allows any transition, including reopening a completed task" {
            assert_eq!(store.get("5").unwrap().status, TaskStatus::Completed);
            assert!(store.change_status("5", TaskStatus::Pending));
            assert_eq!(store.get("5").unwrap().status, TaskStatus::Pending);
        }

        it "is a silent no-op for a nonexistent id" {
            let before = store.tasks().to_vec();
            assert!(!store.change_status("99", TaskStatus::Completed));
            assert_eq!(store.tasks(), before.as_slice());
        }

        it "preserves position in the collection" {
            store.change_status("3", TaskStatus::Completed);

            let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        }
    }

    describe "add" {
        it "appends with the next sequential numeric id" {
            let task = store.add(CreateTaskInput {
                title: "Write release notes".to_string(),
                description: String::new(),
                status: TaskStatus::Pending,
                priority: TaskPriority::Low,
                due_date: "2025-07-01".to_string(),
            });

            assert_eq!(task.id, "6");
            assert_eq!(store.len(), 6);
            assert_eq!(store.tasks().last().unwrap().id, "6");
        }

        it "assigns ids past the highest id still present" {
            store.delete("2");
            let task = store.add(CreateTaskInput {
                title: "New work".to_string(),
                description: String::new(),
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                due_date: "2025-07-01".to_string(),
            });

            assert_eq!(task.id, "6");
        }
    }

    describe "subscriptions" {
        it "notifies with a post-mutation snapshot" {
            let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
            let sink = seen.clone();
            store.subscribe(move |tasks| sink.borrow_mut().push(tasks.len()));

            store.delete("1");
            store.change_status("3", TaskStatus::Completed);

            assert_eq!(*seen.borrow(), vec![4, 4]);
        }

        it "does not notify on a no-op mutation" {
            let count = Rc::new(RefCell::new(0usize));
            let sink = count.clone();
            store.subscribe(move |_| *sink.borrow_mut() += 1);

            store.delete("99");
            store.change_status("99", TaskStatus::Pending);

            assert_eq!(*count.borrow(), 0);
        }

        it "stops notifying after unsubscribe" {
            let count = Rc::new(RefCell::new(0usize));
            let sink = count.clone();
            let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

            store.delete("1");
            store.unsubscribe(id);
            store.delete("2");

            assert_eq!(*count.borrow(), 1);
        }
    }
}
