//! Built-in Docker command reference data

use crate::models::{Category, CommandRecord};

/// All built-in categories, in display order. Counts are filled in by the catalog.
pub fn built_in_categories() -> Vec<Category> {
    vec![
        Category::new(
            "basic",
            "Basic Commands",
            "PlayCircle",
            "Essential Docker commands for container management",
        ),
        Category::new(
            "images",
            "Image Management",
            "Package",
            "Build, tag, and manage Docker images",
        ),
        Category::new(
            "containers",
            "Container Management",
            "Box",
            "Interact with and manage running containers",
        ),
        Category::new(
            "network",
            "Network Commands",
            "Network",
            "Create and manage Docker networks",
        ),
        Category::new(
            "volumes",
            "Volume Commands",
            "HardDrive",
            "Manage persistent data with Docker volumes",
        ),
        Category::new(
            "compose",
            "Docker Compose",
            "Layers",
            "Multi-container application orchestration",
        ),
        Category::new(
            "registry",
            "Registry & Auth",
            "Key",
            "Registry authentication and image search",
        ),
        Category::new(
            "context",
            "Context Management",
            "Globe",
            "Manage Docker contexts for remote connections",
        ),
        Category::new(
            "swarm",
            "Docker Swarm",
            "Cluster",
            "Docker Swarm cluster management",
        ),
        Category::new(
            "service",
            "Service Management",
            "Cloud",
            "Manage Docker Swarm services",
        ),
        Category::new(
            "stack",
            "Stack Management",
            "Stack",
            "Deploy and manage Docker stacks",
        ),
        Category::new(
            "node",
            "Node Management",
            "Server",
            "Manage Docker Swarm nodes",
        ),
        Category::new(
            "plugin",
            "Plugin Management",
            "Puzzle",
            "Manage Docker plugins",
        ),
        Category::new(
            "secret",
            "Secret Management",
            "Lock",
            "Manage Docker secrets in Swarm mode",
        ),
        Category::new(
            "system",
            "System Maintenance",
            "Settings",
            "System cleanup and maintenance commands",
        ),
    ]
}

/// All built-in command records, in display order
pub fn built_in_commands() -> Vec<CommandRecord> {
    let mut commands = Vec::new();

    // Basic Commands
    commands.push(
        CommandRecord::new_built_in(
            "docker-run",
            "docker run",
            "Create and start a new container from an image",
            "docker run -d -p 8080:80 --name my-nginx nginx",
            "basic",
            vec!["container", "start", "create", "run"],
        )
        .popular()
        .with_syntax("docker run [OPTIONS] IMAGE [COMMAND] [ARG...]")
        .with_flags(vec![
            ("-d", "Run container in detached mode (background)"),
            ("-it", "Run interactively with terminal"),
            ("-p", "Map ports host:container"),
            ("--name", "Assign a name to container"),
            ("-v", "Mount volume host:container"),
            ("--rm", "Remove container after exit"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-ps",
            "docker ps",
            "List running containers",
            "docker ps -a",
            "basic",
            vec!["list", "containers", "status"],
        )
        .popular()
        .with_syntax("docker ps [OPTIONS]")
        .with_flags(vec![
            ("-a", "Show all containers (running + stopped)"),
            ("-q", "Only show container IDs"),
            ("--format", "Format output using template"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-stop",
            "docker stop",
            "Stop one or more running containers",
            "docker stop my-container",
            "basic",
            vec!["stop", "container", "halt"],
        )
        .popular()
        .with_syntax("docker stop [OPTIONS] CONTAINER [CONTAINER...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-start",
            "docker start",
            "Start one or more stopped containers",
            "docker start my-container",
            "basic",
            vec!["start", "container", "resume"],
        )
        .with_syntax("docker start [OPTIONS] CONTAINER [CONTAINER...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-restart",
            "docker restart",
            "Restart one or more containers",
            "docker restart my-container",
            "basic",
            vec!["restart", "container", "reboot"],
        )
        .with_syntax("docker restart [OPTIONS] CONTAINER [CONTAINER...]"),
    );

    // Image Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-images",
            "docker images",
            "List all local Docker images",
            "docker images -a",
            "images",
            vec!["images", "list", "local"],
        )
        .popular()
        .with_syntax("docker images [OPTIONS] [REPOSITORY[:TAG]]")
        .with_flags(vec![
            ("-a", "Show all images (including intermediate)"),
            ("-q", "Only show image IDs"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-pull",
            "docker pull",
            "Download an image from a registry",
            "docker pull ubuntu:20.04",
            "images",
            vec!["download", "registry", "image"],
        )
        .popular()
        .with_syntax("docker pull [OPTIONS] NAME[:TAG|@DIGEST]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-push",
            "docker push",
            "Upload an image to a registry",
            "docker push myuser/myapp:latest",
            "images",
            vec!["upload", "registry", "publish"],
        )
        .with_syntax("docker push [OPTIONS] NAME[:TAG]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-build",
            "docker build",
            "Build an image from a Dockerfile",
            "docker build -t myapp:latest .",
            "images",
            vec!["build", "dockerfile", "create"],
        )
        .popular()
        .with_syntax("docker build [OPTIONS] PATH | URL | -")
        .with_flags(vec![
            ("-t", "Name and optionally tag the image"),
            ("-f", "Name of the Dockerfile"),
            ("--no-cache", "Do not use cache when building"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-rmi",
            "docker rmi",
            "Remove one or more images",
            "docker rmi nginx:latest",
            "images",
            vec!["remove", "delete", "image"],
        )
        .with_syntax("docker rmi [OPTIONS] IMAGE [IMAGE...]")
        .with_flags(vec![
            ("-f", "Force removal of the image"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-tag",
            "docker tag",
            "Create a tag TARGET_IMAGE that refers to SOURCE_IMAGE",
            "docker tag myapp:latest myapp:v1.0",
            "images",
            vec!["tag", "version", "alias"],
        )
        .with_syntax("docker tag SOURCE_IMAGE[:TAG] TARGET_IMAGE[:TAG]"),
    );

    // Container Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-exec",
            "docker exec",
            "Execute a command in a running container",
            "docker exec -it my-container bash",
            "containers",
            vec!["execute", "shell", "interactive"],
        )
        .popular()
        .with_syntax("docker exec [OPTIONS] CONTAINER COMMAND [ARG...]")
        .with_flags(vec![
            ("-it", "Interactive terminal"),
            ("-d", "Detached mode"),
            ("-u", "Username or UID"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-logs",
            "docker logs",
            "Fetch the logs of a container",
            "docker logs -f my-container",
            "containers",
            vec!["logs", "output", "debug"],
        )
        .popular()
        .with_syntax("docker logs [OPTIONS] CONTAINER")
        .with_flags(vec![
            ("-f", "Follow log output"),
            ("--tail", "Show last N lines of logs"),
            ("--since", "Show logs since timestamp"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-inspect",
            "docker inspect",
            "Return low-level information on Docker objects",
            "docker inspect my-container",
            "containers",
            vec!["inspect", "details", "metadata"],
        )
        .with_syntax("docker inspect [OPTIONS] NAME|ID [NAME|ID...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-rm",
            "docker rm",
            "Remove one or more containers",
            "docker rm my-container",
            "containers",
            vec!["remove", "delete", "container"],
        )
        .with_syntax("docker rm [OPTIONS] CONTAINER [CONTAINER...]")
        .with_flags(vec![
            ("-f", "Force the removal of a running container"),
            ("-v", "Remove associated volumes"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-cp",
            "docker cp",
            "Copy files/folders between a container and the local filesystem",
            "docker cp my-container:/app/file.txt ./file.txt",
            "containers",
            vec!["copy", "files", "transfer"],
        )
        .with_syntax("docker cp [OPTIONS] CONTAINER:SRC_PATH DEST_PATH"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-stats",
            "docker stats",
            "Display a live stream of container(s) resource usage statistics",
            "docker stats my-container",
            "containers",
            vec!["stats", "performance", "monitor"],
        )
        .with_syntax("docker stats [OPTIONS] [CONTAINER...]"),
    );

    // Network Commands
    commands.push(
        CommandRecord::new_built_in(
            "docker-network-ls",
            "docker network ls",
            "List all networks",
            "docker network ls",
            "network",
            vec!["network", "list"],
        )
        .with_syntax("docker network ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-network-create",
            "docker network create",
            "Create a network",
            "docker network create mynetwork",
            "network",
            vec!["network", "create"],
        )
        .with_syntax("docker network create [OPTIONS] NETWORK"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-network-connect",
            "docker network connect",
            "Connect a container to a network",
            "docker network connect mynetwork my-container",
            "network",
            vec!["network", "connect"],
        )
        .with_syntax("docker network connect [OPTIONS] NETWORK CONTAINER"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-network-disconnect",
            "docker network disconnect",
            "Disconnect a container from a network",
            "docker network disconnect mynetwork my-container",
            "network",
            vec!["network", "disconnect"],
        )
        .with_syntax("docker network disconnect [OPTIONS] NETWORK CONTAINER"),
    );

    // Volume Commands
    commands.push(
        CommandRecord::new_built_in(
            "docker-volume-ls",
            "docker volume ls",
            "List volumes",
            "docker volume ls",
            "volumes",
            vec!["volume", "list", "storage"],
        )
        .with_syntax("docker volume ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-volume-create",
            "docker volume create",
            "Create a volume",
            "docker volume create myvolume",
            "volumes",
            vec!["volume", "create", "storage"],
        )
        .with_syntax("docker volume create [OPTIONS] [VOLUME]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-volume-inspect",
            "docker volume inspect",
            "Display detailed information on one or more volumes",
            "docker volume inspect myvolume",
            "volumes",
            vec!["volume", "inspect", "details"],
        )
        .with_syntax("docker volume inspect [OPTIONS] VOLUME [VOLUME...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-volume-rm",
            "docker volume rm",
            "Remove one or more volumes",
            "docker volume rm myvolume",
            "volumes",
            vec!["volume", "remove", "delete"],
        )
        .with_syntax("docker volume rm [OPTIONS] VOLUME [VOLUME...]"),
    );

    // Docker Compose
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-up",
            "docker-compose up",
            "Create and start containers",
            "docker-compose up -d",
            "compose",
            vec!["compose", "start", "orchestration"],
        )
        .popular()
        .with_syntax("docker-compose up [OPTIONS] [SERVICE...]")
        .with_flags(vec![
            ("-d", "Detached mode"),
            ("--build", "Build images before starting containers"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-down",
            "docker-compose down",
            "Stop and remove containers, networks",
            "docker-compose down -v",
            "compose",
            vec!["compose", "stop", "cleanup"],
        )
        .popular()
        .with_syntax("docker-compose down [OPTIONS]")
        .with_flags(vec![
            ("-v", "Remove named volumes and anonymous volumes"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-build",
            "docker-compose build",
            "Build or rebuild services",
            "docker-compose build --no-cache",
            "compose",
            vec!["compose", "build"],
        )
        .with_syntax("docker-compose build [OPTIONS] [SERVICE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-logs",
            "docker-compose logs",
            "View output from containers",
            "docker-compose logs -f web",
            "compose",
            vec!["compose", "logs", "debug"],
        )
        .with_syntax("docker-compose logs [OPTIONS] [SERVICE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-ps",
            "docker-compose ps",
            "List containers",
            "docker-compose ps",
            "compose",
            vec!["compose", "list", "status"],
        )
        .with_syntax("docker-compose ps [OPTIONS] [SERVICE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-exec",
            "docker-compose exec",
            "Execute a command in a running container",
            "docker-compose exec web bash",
            "compose",
            vec!["compose", "execute", "shell"],
        )
        .with_syntax("docker-compose exec [OPTIONS] SERVICE COMMAND [ARGS...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-run",
            "docker-compose run",
            "Run a one-off command on a service",
            "docker-compose run --rm web npm test",
            "compose",
            vec!["compose", "run", "oneoff"],
        )
        .with_syntax("docker-compose run [OPTIONS] SERVICE [COMMAND] [ARGS...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-pull",
            "docker-compose pull",
            "Pull service images",
            "docker-compose pull",
            "compose",
            vec!["compose", "pull", "images"],
        )
        .with_syntax("docker-compose pull [OPTIONS] [SERVICE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-restart",
            "docker-compose restart",
            "Restart services",
            "docker-compose restart web",
            "compose",
            vec!["compose", "restart"],
        )
        .with_syntax("docker-compose restart [OPTIONS] [SERVICE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-compose-stop",
            "docker-compose stop",
            "Stop services",
            "docker-compose stop",
            "compose",
            vec!["compose", "stop"],
        )
        .with_syntax("docker-compose stop [OPTIONS] [SERVICE...]"),
    );

    // Container Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-attach",
            "docker attach",
            "Attach local standard input, output, and error streams to a running container",
            "docker attach my-container",
            "containers",
            vec!["attach", "console", "interactive"],
        )
        .with_syntax("docker attach [OPTIONS] CONTAINER"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-commit",
            "docker commit",
            "Create a new image from a container's changes",
            "docker commit my-container my-new-image:latest",
            "containers",
            vec!["commit", "save", "image"],
        )
        .with_syntax("docker commit [OPTIONS] CONTAINER [REPOSITORY[:TAG]]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-create",
            "docker create",
            "Create a new container but do not start it",
            "docker create --name my-container nginx",
            "containers",
            vec!["create", "container", "prepare"],
        )
        .with_syntax("docker create [OPTIONS] IMAGE [COMMAND] [ARG...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-diff",
            "docker diff",
            "Inspect changes to files or directories on a container's filesystem",
            "docker diff my-container",
            "containers",
            vec!["diff", "changes", "filesystem"],
        )
        .with_syntax("docker diff CONTAINER"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-export",
            "docker export",
            "Export a container's filesystem as a tar archive",
            "docker export my-container > my-container.tar",
            "containers",
            vec!["export", "backup", "archive"],
        )
        .with_syntax("docker export [OPTIONS] CONTAINER"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-kill",
            "docker kill",
            "Kill one or more running containers",
            "docker kill my-container",
            "containers",
            vec!["kill", "terminate", "force"],
        )
        .with_syntax("docker kill [OPTIONS] CONTAINER [CONTAINER...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-pause",
            "docker pause",
            "Pause all processes within one or more containers",
            "docker pause my-container",
            "containers",
            vec!["pause", "suspend", "freeze"],
        )
        .with_syntax("docker pause CONTAINER [CONTAINER...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-unpause",
            "docker unpause",
            "Unpause all processes within one or more containers",
            "docker unpause my-container",
            "containers",
            vec!["unpause", "resume", "unfreeze"],
        )
        .with_syntax("docker unpause CONTAINER [CONTAINER...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-rename",
            "docker rename",
            "Rename a container",
            "docker rename old-name new-name",
            "containers",
            vec!["rename", "name", "change"],
        )
        .with_syntax("docker rename CONTAINER NEW_NAME"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-update",
            "docker update",
            "Update configuration of one or more containers",
            "docker update --memory 512m my-container",
            "containers",
            vec!["update", "configure", "resources"],
        )
        .with_syntax("docker update [OPTIONS] CONTAINER [CONTAINER...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-wait",
            "docker wait",
            "Block until one or more containers stop, then print their exit codes",
            "docker wait my-container",
            "containers",
            vec!["wait", "block", "exit"],
        )
        .with_syntax("docker wait CONTAINER [CONTAINER...]"),
    );

    // Image Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-history",
            "docker history",
            "Show the history of an image",
            "docker history nginx:latest",
            "images",
            vec!["history", "layers", "info"],
        )
        .with_syntax("docker history [OPTIONS] IMAGE"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-save",
            "docker save",
            "Save one or more images to a tar archive",
            "docker save nginx:latest > nginx.tar",
            "images",
            vec!["save", "backup", "export"],
        )
        .with_syntax("docker save [OPTIONS] IMAGE [IMAGE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-load",
            "docker load",
            "Load an image from a tar archive or STDIN",
            "docker load < nginx.tar",
            "images",
            vec!["load", "import", "restore"],
        )
        .with_syntax("docker load [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-import",
            "docker import",
            "Import the contents from a tarball to create a filesystem image",
            "docker import my-container.tar my-image:latest",
            "images",
            vec!["import", "create", "tarball"],
        )
        .with_syntax("docker import [OPTIONS] file|URL|- [REPOSITORY[:TAG]]"),
    );

    // Registry & Auth
    commands.push(
        CommandRecord::new_built_in(
            "docker-login",
            "docker login",
            "Log in to a Docker registry",
            "docker login docker.io",
            "registry",
            vec!["login", "auth", "registry"],
        )
        .with_syntax("docker login [OPTIONS] [SERVER]")
        .with_flags(vec![
            ("-u", "Username"),
            ("-p", "Password"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-logout",
            "docker logout",
            "Log out from a Docker registry",
            "docker logout docker.io",
            "registry",
            vec!["logout", "auth", "registry"],
        )
        .with_syntax("docker logout [SERVER]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-search",
            "docker search",
            "Search the Docker Hub for images",
            "docker search nginx",
            "registry",
            vec!["search", "hub", "images"],
        )
        .with_syntax("docker search [OPTIONS] TERM"),
    );

    // Context Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-context-ls",
            "docker context ls",
            "List contexts",
            "docker context ls",
            "context",
            vec!["context", "list", "remote"],
        )
        .with_syntax("docker context ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-context-create",
            "docker context create",
            "Create a context",
            "docker context create remote --docker host=ssh://user@host",
            "context",
            vec!["context", "create", "remote"],
        )
        .with_syntax("docker context create [OPTIONS] CONTEXT"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-context-use",
            "docker context use",
            "Set the current docker context",
            "docker context use remote",
            "context",
            vec!["context", "switch", "use"],
        )
        .with_syntax("docker context use CONTEXT"),
    );

    // Docker Swarm
    commands.push(
        CommandRecord::new_built_in(
            "docker-swarm-init",
            "docker swarm init",
            "Initialize a swarm",
            "docker swarm init --advertise-addr 192.168.1.100",
            "swarm",
            vec!["swarm", "init", "cluster"],
        )
        .with_syntax("docker swarm init [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-swarm-join",
            "docker swarm join",
            "Join a swarm as a node and/or manager",
            "docker swarm join --token TOKEN 192.168.1.100:2377",
            "swarm",
            vec!["swarm", "join", "cluster"],
        )
        .with_syntax("docker swarm join [OPTIONS] HOST:PORT"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-swarm-leave",
            "docker swarm leave",
            "Leave the swarm",
            "docker swarm leave --force",
            "swarm",
            vec!["swarm", "leave", "cluster"],
        )
        .with_syntax("docker swarm leave [OPTIONS]"),
    );

    // Service Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-service-create",
            "docker service create",
            "Create a new service",
            "docker service create --name web --replicas 3 nginx",
            "service",
            vec!["service", "create", "swarm"],
        )
        .with_syntax("docker service create [OPTIONS] IMAGE [COMMAND] [ARG...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-service-ls",
            "docker service ls",
            "List services",
            "docker service ls",
            "service",
            vec!["service", "list", "swarm"],
        )
        .with_syntax("docker service ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-service-ps",
            "docker service ps",
            "List the tasks of one or more services",
            "docker service ps web",
            "service",
            vec!["service", "tasks", "status"],
        )
        .with_syntax("docker service ps [OPTIONS] SERVICE [SERVICE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-service-scale",
            "docker service scale",
            "Scale one or multiple replicated services",
            "docker service scale web=5",
            "service",
            vec!["service", "scale", "replicas"],
        )
        .with_syntax("docker service scale SERVICE=REPLICAS [SERVICE=REPLICAS...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-service-update",
            "docker service update",
            "Update a service",
            "docker service update --image nginx:1.20 web",
            "service",
            vec!["service", "update", "rolling"],
        )
        .with_syntax("docker service update [OPTIONS] SERVICE"),
    );

    // Stack Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-stack-deploy",
            "docker stack deploy",
            "Deploy a new stack or update an existing stack",
            "docker stack deploy -c docker-compose.yml mystack",
            "stack",
            vec!["stack", "deploy", "compose"],
        )
        .with_syntax("docker stack deploy [OPTIONS] STACK"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-stack-ls",
            "docker stack ls",
            "List stacks",
            "docker stack ls",
            "stack",
            vec!["stack", "list"],
        )
        .with_syntax("docker stack ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-stack-rm",
            "docker stack rm",
            "Remove one or more stacks",
            "docker stack rm mystack",
            "stack",
            vec!["stack", "remove", "delete"],
        )
        .with_syntax("docker stack rm STACK [STACK...]"),
    );

    // Node Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-node-ls",
            "docker node ls",
            "List nodes in the swarm",
            "docker node ls",
            "node",
            vec!["node", "list", "swarm"],
        )
        .with_syntax("docker node ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-node-promote",
            "docker node promote",
            "Promote one or more nodes to manager in the swarm",
            "docker node promote node-1",
            "node",
            vec!["node", "promote", "manager"],
        )
        .with_syntax("docker node promote NODE [NODE...]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-node-demote",
            "docker node demote",
            "Demote one or more nodes from manager in the swarm",
            "docker node demote node-1",
            "node",
            vec!["node", "demote", "worker"],
        )
        .with_syntax("docker node demote NODE [NODE...]"),
    );

    // Plugin Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-plugin-ls",
            "docker plugin ls",
            "List plugins",
            "docker plugin ls",
            "plugin",
            vec!["plugin", "list"],
        )
        .with_syntax("docker plugin ls [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-plugin-install",
            "docker plugin install",
            "Install a plugin",
            "docker plugin install vieux/sshfs",
            "plugin",
            vec!["plugin", "install"],
        )
        .with_syntax("docker plugin install [OPTIONS] PLUGIN [KEY=VALUE...]"),
    );

    // Secret Management
    commands.push(
        CommandRecord::new_built_in(
            "docker-secret-create",
            "docker secret create",
            "Create a secret from a file or STDIN as content",
            "docker secret create my-secret ./secret.txt",
            "secret",
            vec!["secret", "create", "swarm"],
        )
        .with_syntax("docker secret create [OPTIONS] SECRET [file|-]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-secret-ls",
            "docker secret ls",
            "List secrets",
            "docker secret ls",
            "secret",
            vec!["secret", "list", "swarm"],
        )
        .with_syntax("docker secret ls [OPTIONS]"),
    );

    // System Maintenance
    commands.push(
        CommandRecord::new_built_in(
            "docker-system-prune",
            "docker system prune",
            "Remove unused data",
            "docker system prune -a",
            "system",
            vec!["cleanup", "prune", "system"],
        )
        .popular()
        .with_syntax("docker system prune [OPTIONS]")
        .with_flags(vec![
            ("-a", "Remove all unused images, not just dangling ones"),
            ("-f", "Do not prompt for confirmation"),
        ]),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-system-df",
            "docker system df",
            "Show docker filesystem usage",
            "docker system df -v",
            "system",
            vec!["disk", "usage", "space"],
        )
        .with_syntax("docker system df [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-version",
            "docker version",
            "Show the Docker version information",
            "docker version",
            "system",
            vec!["version", "info"],
        )
        .with_syntax("docker version [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-info",
            "docker info",
            "Display system-wide information",
            "docker info",
            "system",
            vec!["info", "system", "details"],
        )
        .with_syntax("docker info [OPTIONS]"),
    );
    commands.push(
        CommandRecord::new_built_in(
            "docker-events",
            "docker events",
            "Get real time events from the server",
            "docker events --since \"2023-01-01\"",
            "system",
            vec!["events", "monitor", "realtime"],
        )
        .with_syntax("docker events [OPTIONS]"),
    );

    commands
}
